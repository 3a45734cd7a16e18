use serde::{Deserialize, Serialize};

use crate::profile::Goal;

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub food: String,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default = "default_condition")]
    pub condition: String,
}

fn default_condition() -> String {
    "none".into()
}

/// A generated recipe as the dashboard consumes it. Deserialization doubles
/// as the shape check on model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub calories: i64,
    pub protein: i64,
    pub fats: i64,
    pub ingredients: Vec<String>,
    pub instructions: String,
}
