use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_servings")]
    pub servings: f64,
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub labels: Vec<String>,
}

fn default_unit() -> String {
    "bowl".into()
}

fn default_servings() -> f64 {
    1.0
}
