use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub groq_api_key: String,
    pub groq_model: String,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        let groq_api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        if groq_api_key.is_empty() {
            tracing::warn!("GROQ_API_KEY is not set; AI endpoints fall back to offline replies");
        }
        let groq_model =
            std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".into());
        let data_dir: PathBuf = std::env::var("DATA_DIR")
            .unwrap_or_else(|_| "./data".into())
            .into();
        Ok(Self {
            host,
            port,
            groq_api_key,
            groq_model,
            data_dir,
        })
    }
}
