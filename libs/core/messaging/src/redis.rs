//! Redis Streams publisher backend.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::sync::Arc;
use tracing::debug;

use crate::error::PublishError;
use crate::publisher::EventPublisher;

/// Publisher that appends events to Redis streams via `XADD`.
///
/// Streams are trimmed with `MAXLEN ~` so a dead consumer cannot grow a
/// stream without bound.
pub struct RedisEventPublisher {
    redis: Arc<ConnectionManager>,
    max_length: i64,
}

impl RedisEventPublisher {
    pub fn new(redis: ConnectionManager) -> Self {
        Self {
            redis: Arc::new(redis),
            max_length: 100_000,
        }
    }

    /// Create from an `Arc<ConnectionManager>` (for sharing connections).
    pub fn from_arc(redis: Arc<ConnectionManager>) -> Self {
        Self {
            redis,
            max_length: 100_000,
        }
    }

    /// Set the maximum stream length (`MAXLEN ~`).
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Clone for RedisEventPublisher {
    fn clone(&self) -> Self {
        Self {
            redis: self.redis.clone(),
            max_length: self.max_length,
        }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, stream: &str, payload: String) -> Result<String, PublishError> {
        let mut conn = (*self.redis).clone();

        // XADD with MAXLEN ~ for approximate trimming (more efficient)
        let message_id: String = redis::cmd("XADD")
            .arg(stream)
            .arg("MAXLEN")
            .arg("~")
            .arg(self.max_length)
            .arg("*")
            .arg("event")
            .arg(&payload)
            .query_async(&mut conn)
            .await?;

        debug!(
            stream = %stream,
            message_id = %message_id,
            "Published event"
        );

        Ok(message_id)
    }
}
