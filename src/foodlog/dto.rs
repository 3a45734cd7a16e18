use serde::{Deserialize, Serialize};

/// Where a logged entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    Scan,
    #[serde(rename = "AI Recipe")]
    AiRecipe,
}

/// One logged food, attributed to a single calendar date at creation and
/// never reattributed. `id` is epoch milliseconds and doubles as the sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedEntry {
    pub id: i64,
    pub name: String,
    pub calories: i64,
    pub protein: i64,
    pub fats: i64,
    #[serde(default)]
    pub fiber: i64,
    pub servings: f64,
    pub unit: String,
    pub time: String,
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    #[serde(default)]
    pub date: Option<String>,
}

/// Scan-style logging: free-text name resolved against the catalog.
#[derive(Debug, Deserialize)]
pub struct LogFoodRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_unit() -> String {
    "bowl".into()
}

fn default_servings() -> f64 {
    1.0
}

/// AI-recipe logging: nutrition comes straight from the generated recipe.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecipeRequest {
    pub title: String,
    pub calories: i64,
    pub protein: i64,
    #[serde(default)]
    pub fats: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayTotals {
    pub calories: i64,
    pub protein: i64,
    pub fats: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: String,
    pub totals: DayTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_calories: Option<i64>,
    pub notifications: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
}
