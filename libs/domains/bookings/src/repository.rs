use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, CreateBooking, UpdateBooking};

/// Repository trait for Booking persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking, returning it with the storage-assigned id
    async fn create(&self, input: CreateBooking) -> BookingResult<Booking>;

    /// Get a booking by ID
    async fn get_by_id(&self, id: i64) -> BookingResult<Option<Booking>>;

    /// List bookings owned by a user, newest first
    async fn list_by_user(&self, user_id: i64) -> BookingResult<Vec<Booking>>;

    /// Update an existing booking
    async fn update(&self, id: i64, input: UpdateBooking) -> BookingResult<Booking>;

    /// Delete a booking by ID; returns `false` when no row existed
    async fn delete(&self, id: i64) -> BookingResult<bool>;
}

/// In-memory implementation of BookingRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<HashMap<i64, Booking>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, input: CreateBooking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();

        let booking = Booking {
            id,
            user_id: input.user_id,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            created_at: now,
            updated_at: now,
        };

        bookings.insert(id, booking.clone());

        tracing::info!(booking_id = id, user_id = booking.user_id, "Created booking");
        Ok(booking)
    }

    async fn get_by_id(&self, id: i64) -> BookingResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn list_by_user(&self, user_id: i64) -> BookingResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;

        let mut result: Vec<Booking> = bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn update(&self, id: i64, input: UpdateBooking) -> BookingResult<Booking> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .get_mut(&id)
            .ok_or(BookingError::NotFound(id))?;

        booking.apply_update(input);

        tracing::info!(booking_id = id, "Updated booking");
        Ok(booking.clone())
    }

    async fn delete(&self, id: i64) -> BookingResult<bool> {
        let mut bookings = self.bookings.write().await;

        if bookings.remove(&id).is_some() {
            tracing::info!(booking_id = id, "Deleted booking");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
