//! Event publishing abstractions for the booking backend.
//!
//! Domain services emit events (serialized JSON payloads) to named streams
//! without knowing the transport. The production backend appends to Redis
//! streams; tests use the in-memory and always-failing doubles.
//!
//! # Example
//!
//! ```ignore
//! use messaging::{EventPublisher, RedisEventPublisher};
//!
//! let redis = database::redis::connect("redis://127.0.0.1:6379").await?;
//! let publisher = RedisEventPublisher::new(redis);
//!
//! let payload = serde_json::to_string(&event)?;
//! let message_id = publisher.publish("users:events", payload).await?;
//! ```

mod error;
mod publisher;
mod redis;
mod stream;

pub use error::PublishError;
pub use publisher::{EventPublisher, FailingPublisher, InMemoryPublisher, PublishedMessage};
pub use redis::RedisEventPublisher;
pub use stream::StreamDef;
