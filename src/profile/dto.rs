use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintenance,
    Loss,
    Gain,
    Muscle,
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Goal::Maintenance => "maintenance",
            Goal::Loss => "loss",
            Goal::Gain => "gain",
            Goal::Muscle => "muscle",
        };
        f.write_str(s)
    }
}

/// The single active session's health profile, as the dashboard submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    pub sex: String,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_goal: Option<i64>,
}

fn default_condition() -> String {
    "none".into()
}

/// Daily nutrient goals derived from the profile. Recomputed on demand,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: i64,
    pub protein: i64,
    pub fats: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsResponse {
    #[serde(flatten)]
    pub targets: NutritionTargets,
    pub bmi: f64,
    pub bmi_label: &'static str,
    pub prediction: String,
}
