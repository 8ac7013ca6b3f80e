use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::entity;
use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, CreateBooking, UpdateBooking};
use crate::repository::BookingRepository;

/// PostgreSQL implementation of [`BookingRepository`] using SeaORM.
#[derive(Clone)]
pub struct PgBookingRepository {
    db: DatabaseConnection,
}

impl PgBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, input: CreateBooking) -> BookingResult<Booking> {
        let model = entity::ActiveModel::from(&input).insert(&self.db).await?;

        tracing::info!(booking_id = model.id, user_id = model.user_id, "Created booking");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> BookingResult<Option<Booking>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn list_by_user(&self, user_id: i64) -> BookingResult<Vec<Booking>> {
        let models = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i64, input: UpdateBooking) -> BookingResult<Booking> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(BookingError::NotFound(id))?;

        let mut booking: Booking = model.into();
        booking.apply_update(input);

        let active = entity::ActiveModel {
            id: Set(booking.id),
            user_id: Set(booking.user_id),
            starts_at: Set(booking.starts_at.into()),
            ends_at: Set(booking.ends_at.into()),
            created_at: Set(booking.created_at.into()),
            updated_at: Set(booking.updated_at.into()),
        };

        let updated = active.update(&self.db).await?;

        tracing::info!(booking_id = id, "Updated booking");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> BookingResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(booking_id = id, "Deleted booking");
        }
        Ok(result.rows_affected > 0)
    }
}
