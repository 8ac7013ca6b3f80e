use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// SeaORM entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role::Entity")]
    Roles,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from a row plus its role rows to the domain User
impl From<(Model, Vec<super::role::Model>)> for crate::models::User {
    fn from((user, roles): (Model, Vec<super::role::Model>)) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            roles: roles.into_iter().map(Into::into).collect(),
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
        }
    }
}

// Conversion from the insert shape to an ActiveModel; the id stays NotSet
// so storage assigns it
impl From<&crate::models::NewUser> for ActiveModel {
    fn from(input: &crate::models::NewUser) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            username: Set(input.username.clone()),
            password_hash: Set(input.password_hash.clone()),
            email: Set(input.email.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
