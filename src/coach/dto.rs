use serde::{Deserialize, Serialize};

use crate::profile::Goal;

/// The slice of the profile the chat prompt cares about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatProfile {
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default)]
    pub goal: Goal,
}

impl Default for ChatProfile {
    fn default() -> Self {
        Self {
            diet_type: default_diet_type(),
            condition: default_condition(),
            goal: Goal::default(),
        }
    }
}

fn default_diet_type() -> String {
    "veg".into()
}

fn default_condition() -> String {
    "none".into()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub profile: Option<ChatProfile>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
