use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking entity - a reserved time interval owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Storage-assigned identifier
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Apply an update in place; touched fields only.
    pub fn apply_update(&mut self, update: UpdateBooking) {
        if let Some(starts_at) = update.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(ends_at) = update.ends_at {
            self.ends_at = ends_at;
        }
        self.updated_at = Utc::now();
    }
}

/// DTO for creating a new booking
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub user_id: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// DTO for updating an existing booking
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBooking {
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}
