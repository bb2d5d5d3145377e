use async_trait::async_trait;
use linkhop_core::repository::Result;
use linkhop_core::{ReadRepository, Repository, ShortCode, Shortcut, StorageError};
use redis::AsyncCommands;
use tracing::{debug, trace, warn};

/// Key prefix used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "lh:shortcut:";

/// A Redis-backed implementation of [`Repository`].
///
/// Shortcuts are stored as JSON documents (`{"code": .., "href": ..}`)
/// under `<prefix><code>`. Writes use a plain `SET`, so creating an
/// existing code replaces its mapping.
#[derive(Debug, Clone)]
pub struct RedisRepository {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisRepository {
    /// Creates a repository over an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a repository with a custom key prefix (e.g. "myapp:shortcut:").
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a new multiplexed connection to `redis_url`.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("invalid redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;
        Ok(Self::with_prefix(conn, key_prefix))
    }

    fn key(&self, code: &ShortCode) -> String {
        format!("{}{}", self.key_prefix, code.as_str())
    }
}

#[async_trait]
impl ReadRepository for RedisRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<Shortcut>> {
        let key = self.key(code);
        trace!(code = %code, "fetching shortcut from Redis");

        let mut conn = self.conn.clone();
        let raw = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| {
                warn!(code = %code, error = %e, "Redis error on get");
                map_redis_error("failed to fetch value from Redis", e)
            })?;

        let Some(raw) = raw else {
            trace!(code = %code, "shortcut not in Redis");
            return Ok(None);
        };

        match serde_json::from_str::<Shortcut>(&raw) {
            Ok(shortcut) => {
                debug!(code = %code, "shortcut found in Redis");
                Ok(Some(shortcut))
            }
            Err(e) => {
                warn!(code = %code, error = %e, "failed to deserialize stored shortcut");
                Err(StorageError::InvalidData(format!(
                    "invalid stored value for key '{key}': {e}"
                )))
            }
        }
    }
}

#[async_trait]
impl Repository for RedisRepository {
    async fn put(&self, shortcut: &Shortcut) -> Result<()> {
        let key = self.key(&shortcut.code);
        trace!(code = %shortcut.code, "storing shortcut in Redis");

        let json = serde_json::to_string(shortcut).map_err(|e| {
            StorageError::InvalidData(format!("failed to serialize shortcut: {e}"))
        })?;

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&key, json).await {
            Ok(()) => {
                debug!(code = %shortcut.code, "stored shortcut in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(code = %shortcut.code, error = %e, "failed to store shortcut in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }
}
