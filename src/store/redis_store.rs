//! Redis [`Store`] backend.
//!
//! Each record is a JSON string under the key `slotboard:{path}`, read and
//! written through a multiplexed Tokio connection. Useful when the config
//! tree is mirrored into Redis instead of the hosted Realtime Database.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use tokio::sync::Mutex;

use super::Store;
use crate::error::SlotboardError;

pub struct RedisStore {
    connection: Mutex<redis::aio::MultiplexedConnection>,
}

impl RedisStore {
    pub async fn new(url: &str) -> Result<Self, SlotboardError> {
        let client = redis::Client::open(url).map_err(|e| SlotboardError::InvalidUrl {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| SlotboardError::Connection {
                source: Box::new(e),
            })?;

        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn key(path: &str) -> String {
        format!("slotboard:{path}")
    }

    fn map_err(e: redis::RedisError) -> SlotboardError {
        if e.is_connection_refusal() || e.is_io_error() || e.is_timeout() {
            SlotboardError::Connection {
                source: Box::new(e),
            }
        } else {
            SlotboardError::Store {
                backend: "redis",
                source: Box::new(e),
            }
        }
    }
}

#[async_trait]
impl Store for RedisStore {
    fn name(&self) -> &'static str {
        "redis"
    }

    #[allow(clippy::significant_drop_tightening)]
    async fn read(&self, path: &str) -> Result<Option<Value>, SlotboardError> {
        let mut conn = self.connection.lock().await;
        let raw: Option<String> = conn.get(Self::key(path)).await.map_err(Self::map_err)?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| SlotboardError::Decode {
                path: path.to_string(),
                source: Box::new(e),
            })
        })
        .transpose()
    }

    #[allow(clippy::significant_drop_tightening)]
    async fn write(&self, path: &str, value: &Value) -> Result<(), SlotboardError> {
        let json = value.to_string();
        let mut conn = self.connection.lock().await;
        conn.set::<_, _, ()>(Self::key(path), json)
            .await
            .map_err(Self::map_err)
    }

    #[allow(clippy::significant_drop_tightening)]
    async fn delete(&self, path: &str) -> Result<(), SlotboardError> {
        let mut conn = self.connection.lock().await;
        conn.del::<_, ()>(Self::key(path))
            .await
            .map_err(Self::map_err)
    }

    #[allow(clippy::significant_drop_tightening)]
    async fn exists(&self, path: &str) -> Result<bool, SlotboardError> {
        let mut conn = self.connection.lock().await;
        conn.exists(Self::key(path)).await.map_err(Self::map_err)
    }
}
