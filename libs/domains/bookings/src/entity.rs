use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// SeaORM entity for the bookings table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user; the users domain clears these rows on user deletion
    pub user_id: i64,
    pub starts_at: DateTimeWithTimeZone,
    pub ends_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Booking {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            starts_at: model.starts_at.into(),
            ends_at: model.ends_at.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// The id stays NotSet so storage assigns it
impl From<&crate::models::CreateBooking> for ActiveModel {
    fn from(input: &crate::models::CreateBooking) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            user_id: Set(input.user_id),
            starts_at: Set(input.starts_at.into()),
            ends_at: Set(input.ends_at.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
