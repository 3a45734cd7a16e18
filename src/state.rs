use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::catalog::FoodCatalog;
use crate::config::AppConfig;
use crate::foodlog::{FoodLog, LoggedEntry};
use crate::llm::{CannedLlm, GroqClient, LlmClient};
use crate::profile::UserProfile;
use crate::store::{JsonFileStore, MemoryStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<FoodCatalog>,
    pub store: Arc<dyn Store>,
    pub llm: Arc<dyn LlmClient>,
    pub log: Arc<RwLock<FoodLog>>,
    pub profile: Arc<RwLock<Option<UserProfile>>>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store: Arc<dyn Store> = Arc::new(JsonFileStore::new(&config.data_dir)?);
        let llm: Arc<dyn LlmClient> = Arc::new(GroqClient::new(
            config.groq_api_key.clone(),
            config.groq_model.clone(),
        ));
        Ok(Self::from_parts(config, store, llm).await)
    }

    /// Session state is restored from the store at startup; absence is a
    /// normal empty state, a malformed value is logged and dropped.
    pub async fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn Store>,
        llm: Arc<dyn LlmClient>,
    ) -> Self {
        let log = restore_log(store.as_ref()).await;
        let profile = restore_profile(store.as_ref()).await;

        Self {
            config,
            catalog: Arc::new(FoodCatalog::load()),
            store,
            llm,
            log: Arc::new(RwLock::new(log)),
            profile: Arc::new(RwLock::new(profile)),
        }
    }

    /// In-memory state with an offline LLM, for tests.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            groq_api_key: String::new(),
            groq_model: "test".into(),
            data_dir: "./data".into(),
        });
        Self {
            config,
            catalog: Arc::new(FoodCatalog::load()),
            store: Arc::new(MemoryStore::default()),
            llm: Arc::new(CannedLlm::offline()),
            log: Arc::new(RwLock::new(FoodLog::default())),
            profile: Arc::new(RwLock::new(None)),
        }
    }
}

async fn restore_log(store: &dyn Store) -> FoodLog {
    match store.load("foodLog").await {
        Ok(Some(value)) => match serde_json::from_value::<Vec<LoggedEntry>>(value) {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "restored food log");
                FoodLog::from_entries(entries)
            }
            Err(e) => {
                warn!(error = %e, "stored food log is malformed; starting empty");
                FoodLog::default()
            }
        },
        Ok(None) => FoodLog::default(),
        Err(e) => {
            warn!(error = %e, "could not read stored food log; starting empty");
            FoodLog::default()
        }
    }
}

async fn restore_profile(store: &dyn Store) -> Option<UserProfile> {
    match store.load("profile").await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(error = %e, "stored profile is malformed; ignoring");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "could not read stored profile; ignoring");
            None
        }
    }
}
