//! Error types for event publishing.

use thiserror::Error;

/// Error that can occur while publishing an event.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Payload serialization failed before reaching the backend
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The Redis backend rejected the append
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Generic backend failure (used by test doubles and future backends)
    #[error("backend error: {0}")]
    Backend(String),
}
