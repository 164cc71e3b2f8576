//! The [`Store`] trait and its backends.
//!
//! A store is a remote key-value tree addressed by hierarchical path strings
//! (`ads_config/global`, `ads_config/<slot_id>`, ...). Values are arbitrary
//! JSON. Backends classify their transport failures into the structured
//! [`SlotboardError`] variants at this boundary; nothing above the trait
//! inspects error message text.

pub mod memory;
pub mod rtdb;

#[cfg(feature = "redis")]
pub mod redis_store;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SlotboardError;

// async_trait is required here because Store is used as Arc<dyn Store>
// and native async fn in traits (Rust 1.75+) does not support dyn dispatch.
#[async_trait]
pub trait Store: Send + Sync {
    fn name(&self) -> &'static str;

    /// Read the value at `path`, or `None` if no record exists there.
    async fn read(&self, path: &str) -> Result<Option<Value>, SlotboardError>;

    /// Upsert the value at `path`.
    async fn write(&self, path: &str, value: &Value) -> Result<(), SlotboardError>;

    /// Remove the record at `path`. Deleting an absent record is not an error.
    async fn delete(&self, path: &str) -> Result<(), SlotboardError>;

    /// Whether a record exists at `path`. Backends with a cheaper existence
    /// check than a full read should override this.
    async fn exists(&self, path: &str) -> Result<bool, SlotboardError> {
        Ok(self.read(path).await?.is_some())
    }
}
