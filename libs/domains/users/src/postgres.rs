use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Statement, TransactionTrait,
};

use crate::entity::{role, user};
use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

/// PostgreSQL implementation of [`UserRepository`] using SeaORM.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assemble a domain user from its row plus the owned role rows.
    async fn load(&self, model: user::Model) -> UserResult<User> {
        let roles = model.find_related(role::Entity).all(&self.db).await?;
        Ok((model, roles).into())
    }
}

/// Map a unique-constraint violation onto the duplicate-key error for the
/// column it names; anything else stays a database error.
fn map_unique_violation(err: DbErr, input: &NewUser) -> UserError {
    let msg = err.to_string();
    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        if msg.contains("username") {
            UserError::DuplicateUsername(input.username.clone())
        } else {
            UserError::DuplicateEmail(input.email.clone())
        }
    } else {
        UserError::Database(msg)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let txn = self.db.begin().await?;

        let user_model = user::ActiveModel::from(&input)
            .insert(&txn)
            .await
            .map_err(|e| map_unique_violation(e, &input))?;

        let role_model = role::ActiveModel {
            name: Set(input.role),
            user_id: Set(user_model.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(user_id = user_model.id, username = %user_model.username, "Created user");
        Ok((user_model, vec![role_model]).into())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;

        match model {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        match model {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        match model {
            Some(model) => Ok(Some(self.load(model).await?)),
            None => Ok(None),
        }
    }

    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let existing = user::Entity::find_by_id(user.id)
            .one(&self.db)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("no user with id {}", user.id)))?;

        let mut active: user::ActiveModel = existing.into();
        active.username = Set(user.username.clone());
        active.password_hash = Set(user.password_hash.clone());
        active.email = Set(user.email.clone());
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await?;

        tracing::info!(user_id = model.id, "Updated user");
        self.load(model).await
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let txn = self.db.begin().await?;

        // No FK ON DELETE CASCADE is assumed; dependent rows go first,
        // inside the same transaction as the user row.
        role::Entity::delete_many()
            .filter(role::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        txn.execute_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "DELETE FROM bookings WHERE user_id = $1",
            [id.into()],
        ))
        .await?;

        let result = user::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(result.rows_affected > 0)
    }
}
