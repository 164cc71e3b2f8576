//! In-memory [`Store`] backend.
//!
//! A plain map behind a tokio `Mutex`. Used as the fixture store in the
//! reconciliation tests and handy for dry-running commands against nothing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::Store;
use crate::error::SlotboardError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the full record map, for assertions and debugging dumps.
    pub async fn snapshot(&self) -> BTreeMap<String, Value> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn read(&self, path: &str) -> Result<Option<Value>, SlotboardError> {
        Ok(self.records.lock().await.get(path).cloned())
    }

    async fn write(&self, path: &str, value: &Value) -> Result<(), SlotboardError> {
        self.records
            .lock()
            .await
            .insert(path.to_string(), value.clone());
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), SlotboardError> {
        self.records.lock().await.remove(path);
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool, SlotboardError> {
        Ok(self.records.lock().await.contains_key(path))
    }
}
