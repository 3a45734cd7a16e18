use serde::{Deserialize, Serialize};

use crate::profile::Goal;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinnerRequest {
    pub remaining_calories: i64,
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default)]
    pub goal: Goal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DinnerIdea {
    pub name: String,
    pub calories: i64,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub calories: i64,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeal {
    pub title: String,
    pub calories: i64,
    pub protein: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub breakfast: PlanMeal,
    pub lunch: PlanMeal,
    pub dinner: PlanMeal,
}

/// Full week keyed by day name. Deserializing this type is the shape check
/// for untrusted model output: all seven days and all three meals or bust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    #[serde(rename = "Monday")]
    pub monday: DayPlan,
    #[serde(rename = "Tuesday")]
    pub tuesday: DayPlan,
    #[serde(rename = "Wednesday")]
    pub wednesday: DayPlan,
    #[serde(rename = "Thursday")]
    pub thursday: DayPlan,
    #[serde(rename = "Friday")]
    pub friday: DayPlan,
    #[serde(rename = "Saturday")]
    pub saturday: DayPlan,
    #[serde(rename = "Sunday")]
    pub sunday: DayPlan,
}

fn default_diet_type() -> String {
    "veg".into()
}

fn default_condition() -> String {
    "none".into()
}
