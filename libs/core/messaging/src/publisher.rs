//! Publisher trait and test doubles.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::PublishError;

/// Fire-and-forget event emission to a named stream.
///
/// `publish` enqueues the payload and returns the backend message id; it
/// does not wait for any consumer to see the message.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, stream: &str, payload: String) -> Result<String, PublishError>;
}

/// A message captured by [`InMemoryPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub stream: String,
    pub payload: String,
}

/// In-memory publisher that records every message (for tests).
#[derive(Debug, Default, Clone)]
pub struct InMemoryPublisher {
    messages: Arc<Mutex<Vec<PublishedMessage>>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub async fn published(&self) -> Vec<PublishedMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryPublisher {
    async fn publish(&self, stream: &str, payload: String) -> Result<String, PublishError> {
        let mut messages = self.messages.lock().await;
        messages.push(PublishedMessage {
            stream: stream.to_string(),
            payload,
        });
        Ok(format!("mem-{}", messages.len()))
    }
}

/// Publisher that always fails (for exercising best-effort paths).
#[derive(Debug, Default, Clone)]
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _stream: &str, _payload: String) -> Result<String, PublishError> {
        Err(PublishError::Backend("publisher unavailable".to_string()))
    }
}
