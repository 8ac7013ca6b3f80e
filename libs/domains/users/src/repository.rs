use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, Role, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user together with its initial role, atomically.
    ///
    /// Returns the stored user with storage-assigned ids populated, so the
    /// caller has the id synchronously.
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Get a user (with roles) by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Get a user (with roles) by username
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// Get a user (with roles) by email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> UserResult<bool>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> UserResult<bool>;

    /// Persist the scalar fields of an existing user. Roles are not touched.
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID, cascading to owned roles and bookings.
    ///
    /// Returns `false` when no row existed.
    async fn delete(&self, id: i64) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing).
///
/// Ids are handed out from atomic counters to mimic storage-assigned
/// auto-increment keys. Roles live inside their owning user, so deleting a
/// user drops its roles with it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_user_id: Arc<AtomicI64>,
    next_role_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::DuplicateUsername(user.username));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let role_id = self.next_role_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();

        let stored = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            roles: vec![Role {
                id: role_id,
                name: user.role,
                user_id: id,
            }],
            created_at: now,
            updated_at: now,
        };

        users.insert(id, stored.clone());

        tracing::info!(user_id = id, username = %stored.username, "Created user");
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let existing = users
            .get(&user.id)
            .ok_or_else(|| UserError::NotFound(format!("no user with id {}", user.id)))?;

        // Unique checks excluding the row being updated
        if users
            .values()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(UserError::DuplicateUsername(user.username));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::DuplicateEmail(user.email));
        }

        let mut updated = user;
        updated.roles = existing.roles.clone();
        updated.updated_at = Utc::now();

        users.insert(updated.id, updated.clone());

        tracing::info!(user_id = updated.id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleName;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hashed_password".to_string(),
            role: RoleName::User,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let a = repo.create(new_user("alice", "a@x.com")).await.unwrap();
        let b = repo.create(new_user("bob", "b@x.com")).await.unwrap();

        assert!(a.id > 0);
        assert!(b.id > a.id);
        assert_eq!(a.roles.len(), 1);
        assert_eq!(a.roles[0].user_id, a.id);
    }

    #[tokio::test]
    async fn test_get_by_username_and_email() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("alice", "a@x.com")).await.unwrap();

        let by_name = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        let by_email = repo.get_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        assert!(repo.get_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email_errors() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("alice", "a@x.com")).await.unwrap();

        let result = repo.create(new_user("alice", "other@x.com")).await;
        assert!(matches!(result, Err(UserError::DuplicateUsername(_))));

        let result = repo.create(new_user("bob", "a@x.com")).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_update_preserves_roles() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(new_user("alice", "a@x.com")).await.unwrap();
        let roles_before = user.roles.clone();

        user.username = "alice2".to_string();
        user.password_hash = "rehashed".to_string();

        let updated = repo.update(user).await.unwrap();
        assert_eq!(updated.username, "alice2");
        assert_eq!(updated.roles, roles_before);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::new();

        let ghost = User {
            id: 999,
            username: "ghost".to_string(),
            password_hash: "hash".to_string(),
            email: "ghost@x.com".to_string(),
            roles: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_user_and_roles() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(new_user("alice", "a@x.com")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(repo.get_by_id(user.id).await.unwrap().is_none());
        assert!(!repo.username_exists("alice").await.unwrap());

        // second delete is a no-op
        assert!(!repo.delete(user.id).await.unwrap());
    }
}
