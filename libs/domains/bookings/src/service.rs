use std::sync::Arc;
use tracing::instrument;

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, CreateBooking, UpdateBooking};
use crate::repository::BookingRepository;

/// Service layer for Booking business logic
#[derive(Clone)]
pub struct BookingService<R: BookingRepository> {
    repository: Arc<R>,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new booking with interval validation
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create_booking(&self, input: CreateBooking) -> BookingResult<Booking> {
        validate_interval(&input.starts_at, &input.ends_at)?;

        self.repository.create(input).await
    }

    /// Get a booking by ID
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn get_booking(&self, id: i64) -> BookingResult<Booking> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BookingError::NotFound(id))
    }

    /// List bookings owned by a user, newest first
    pub async fn list_bookings_for_user(&self, user_id: i64) -> BookingResult<Vec<Booking>> {
        self.repository.list_by_user(user_id).await
    }

    /// Update a booking's interval
    #[instrument(skip(self, input), fields(booking_id = %id))]
    pub async fn update_booking(&self, id: i64, input: UpdateBooking) -> BookingResult<Booking> {
        // Validate the interval that would result from the patch
        let mut existing = self.get_booking(id).await?;
        existing.apply_update(input.clone());
        validate_interval(&existing.starts_at, &existing.ends_at)?;

        self.repository.update(id, input).await
    }

    /// Delete a booking
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn delete_booking(&self, id: i64) -> BookingResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(BookingError::NotFound(id));
        }

        Ok(())
    }
}

fn validate_interval(
    starts_at: &chrono::DateTime<chrono::Utc>,
    ends_at: &chrono::DateTime<chrono::Utc>,
) -> BookingResult<()> {
    if ends_at <= starts_at {
        return Err(BookingError::Validation(
            "booking must end after it starts".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryBookingRepository;
    use chrono::{Duration, Utc};

    fn service() -> BookingService<InMemoryBookingRepository> {
        BookingService::new(InMemoryBookingRepository::new())
    }

    fn valid_input(user_id: i64) -> CreateBooking {
        let now = Utc::now();
        CreateBooking {
            user_id,
            starts_at: now,
            ends_at: now + Duration::hours(2),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_booking() {
        let service = service();

        let created = service.create_booking(valid_input(1)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.user_id, 1);

        let fetched = service.get_booking(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_create_booking_rejects_inverted_interval() {
        let service = service();
        let now = Utc::now();

        let result = service
            .create_booking(CreateBooking {
                user_id: 1,
                starts_at: now,
                ends_at: now - Duration::hours(1),
            })
            .await;

        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_booking_is_not_found() {
        let service = service();

        let result = service.get_booking(12).await;
        assert!(matches!(result, Err(BookingError::NotFound(12))));
    }

    #[tokio::test]
    async fn test_update_booking_extends_interval() {
        let service = service();
        let created = service.create_booking(valid_input(1)).await.unwrap();

        let new_end = created.ends_at + Duration::hours(1);
        let updated = service
            .update_booking(
                created.id,
                UpdateBooking {
                    starts_at: None,
                    ends_at: Some(new_end),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.ends_at, new_end);
        assert_eq!(updated.starts_at, created.starts_at);
    }

    #[tokio::test]
    async fn test_update_booking_rejects_resulting_inverted_interval() {
        let service = service();
        let created = service.create_booking(valid_input(1)).await.unwrap();

        let result = service
            .update_booking(
                created.id,
                UpdateBooking {
                    starts_at: Some(created.ends_at + Duration::hours(1)),
                    ends_at: None,
                },
            )
            .await;

        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_booking_then_lookup_fails() {
        let service = service();
        let created = service.create_booking(valid_input(1)).await.unwrap();

        service.delete_booking(created.id).await.unwrap();

        assert!(matches!(
            service.get_booking(created.id).await,
            Err(BookingError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_booking(created.id).await,
            Err(BookingError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        use crate::repository::MockBookingRepository;

        let mut repo = MockBookingRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(BookingError::Database("connection reset".to_string())));

        let service = BookingService::new(repo);

        let result = service.get_booking(1).await;
        assert!(matches!(result, Err(BookingError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_bookings_for_user() {
        let service = service();

        service.create_booking(valid_input(1)).await.unwrap();
        service.create_booking(valid_input(1)).await.unwrap();
        service.create_booking(valid_input(2)).await.unwrap();

        let bookings = service.list_bookings_for_user(1).await.unwrap();
        assert_eq!(bookings.len(), 2);
    }
}
