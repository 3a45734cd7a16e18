use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

/// Key-value persistence used for the profile, the food log and the saved
/// meal plan. Values round-trip as JSON; a missing key is a normal empty
/// state, not an error.
#[async_trait]
pub trait Store: Send + Sync {
    async fn save(&self, key: &str, value: &Value) -> anyhow::Result<()>;
    async fn load(&self, key: &str) -> anyhow::Result<Option<Value>>;
}

/// File-backed store: one `<key>.json` per key under the data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create data dir {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn save(&self, key: &str, value: &Value) -> anyhow::Result<()> {
        let path = self.path_for(key);
        let body = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(key, path = %path.display(), "store saved");
        Ok(())
    }

    async fn load(&self, key: &str) -> anyhow::Result<Option<Value>> {
        let path = self.path_for(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
        };
        let value = serde_json::from_slice(&raw)
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(Some(value))
    }
}

/// In-memory store for tests and `AppState::fake()`.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, Value>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn save(&self, key: &str, value: &Value) -> anyhow::Result<()> {
        self.map.lock().await.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn load(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.map.lock().await.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn memory_store_roundtrip() {
        let store = MemoryStore::default();
        store
            .save("profile", &json!({"name": "Vaibhav"}))
            .await
            .expect("save should succeed");
        let loaded = store.load("profile").await.expect("load should succeed");
        assert_eq!(loaded, Some(json!({"name": "Vaibhav"})));
    }

    #[tokio::test]
    async fn memory_store_missing_key_is_none() {
        let store = MemoryStore::default();
        let loaded = store.load("foodLog").await.expect("load should succeed");
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn file_store_roundtrip_and_absence() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(tmp.path()).expect("store init");

        assert_eq!(store.load("foodLog").await.expect("load"), None);

        let value = json!([{"id": 1, "name": "Roti", "calories": 120}]);
        store.save("foodLog", &value).await.expect("save");
        assert_eq!(store.load("foodLog").await.expect("load"), Some(value));
    }
}
