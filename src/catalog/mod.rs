mod data;
mod dto;
pub mod handlers;

use serde::Serialize;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::resolve_routes())
}

/// One canonical food with per-serving nutrition. `category` is a display
/// grouping only; lookups run over the flat merged table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodRecord {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub calories: f64,
    pub protein: f64,
    pub fats: f64,
    pub fiber: f64,
    pub unit: &'static str,
    pub category: &'static str,
    pub image: Option<&'static str>,
}

impl FoodRecord {
    fn matches_exact(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }

    fn matches_substring(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .aliases
                .iter()
                .any(|a| a.to_lowercase().contains(query))
    }
}

pub struct FoodCatalog {
    records: Vec<FoodRecord>,
}

impl FoodCatalog {
    /// Merge the per-category tables into one flat searchable collection.
    pub fn load() -> Self {
        let records = [
            data::CARB_FOODS,
            data::PROTEIN_FOODS,
            data::SNACK_FOODS,
            data::DRINK_FOODS,
            data::FAT_FOODS,
            data::MIXED_FOODS,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
        Self { records }
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// Case-insensitive exact match over names and aliases; first match wins.
    pub fn find_by_name_or_alias(&self, query: &str) -> Option<&FoodRecord> {
        self.records.iter().find(|r| r.matches_exact(query))
    }

    /// Case-insensitive substring search in insertion order. The empty query
    /// matches everything; callers cap the displayed results, not us.
    pub fn search(&self, query: &str) -> Vec<&FoodRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches_substring(&query))
            .collect()
    }
}

/// A logged-food shaped value: one catalog record scaled by servings, every
/// nutrient rounded to the nearest integer independently.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedFood {
    pub name: String,
    pub calories: i64,
    pub protein: i64,
    pub fats: i64,
    pub fiber: i64,
    pub servings: f64,
    pub unit: String,
    pub image: Option<String>,
}

/// Servings come in on a 0.5 grid with a floor of half a serving. Snaps
/// valid values to the grid; `None` for zero, negative or non-finite input.
pub fn normalize_servings(raw: f64) -> Option<f64> {
    if !raw.is_finite() || raw <= 0.0 {
        return None;
    }
    Some(((raw * 2.0).round() / 2.0).max(0.5))
}

/// Map a free-text name to a catalog record and scale it. `None` when the
/// name is empty or unknown, or the servings are invalid; callers must
/// prompt the user instead of logging a zero-nutrition entry.
pub fn resolve(
    catalog: &FoodCatalog,
    name: &str,
    unit: &str,
    servings: f64,
) -> Option<ResolvedFood> {
    if name.is_empty() {
        return None;
    }
    let servings = normalize_servings(servings)?;
    let record = catalog.find_by_name_or_alias(name)?;

    Some(ResolvedFood {
        name: record.name.to_string(),
        calories: (record.calories * servings).round() as i64,
        protein: (record.protein * servings).round() as i64,
        fats: (record.fats * servings).round() as i64,
        fiber: (record.fiber * servings).round() as i64,
        servings,
        unit: if record.unit.is_empty() {
            unit.to_string()
        } else {
            record.unit.to_string()
        },
        image: record.image.map(str::to_string),
    })
}

/// Labels the vision model likes to get right.
const PREFERRED_LABELS: [&str; 3] = ["banana", "apple", "orange"];

/// Pick the query to run from classifier output: a preferred label if
/// present, otherwise the first one. Labels are hints, never exact matches.
pub fn candidate_query(labels: &[String]) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    labels
        .iter()
        .find(|l| PREFERRED_LABELS.contains(&l.to_lowercase().as_str()))
        .or(labels.first())
        .cloned()
}
