//! Event payloads emitted by the users domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

/// Event emitted after a user account has been created and flushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedEvent {
    /// Unique event ID
    pub event_id: Uuid,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    /// When the event was produced
    pub occurred_at: DateTime<Utc>,
}

impl From<&User> for UserCreatedEvent {
    fn from(user: &User) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            occurred_at: Utc::now(),
        }
    }
}
