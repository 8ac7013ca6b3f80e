use std::sync::Arc;
use tracing::{instrument, warn};
use validator::Validate;

use messaging::{EventPublisher, StreamDef};

use crate::error::{UserError, UserResult};
use crate::events::UserCreatedEvent;
use crate::models::{CreateUser, NewUser, RoleName, UpdateUser, User};
use crate::password::{Argon2PasswordEncoder, PasswordEncoder};
use crate::repository::UserRepository;
use crate::streams::UserEventStream;

/// Service layer for user business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository, P: EventPublisher> {
    repository: Arc<R>,
    publisher: Arc<P>,
    encoder: Arc<dyn PasswordEncoder>,
    event_stream: String,
}

impl<R: UserRepository, P: EventPublisher> UserService<R, P> {
    /// Create a service with the default Argon2 encoder and the canonical
    /// users event stream.
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            repository: Arc::new(repository),
            publisher: Arc::new(publisher),
            encoder: Arc::new(Argon2PasswordEncoder),
            event_stream: UserEventStream::STREAM_NAME.to_string(),
        }
    }

    /// Override the credential encoder.
    pub fn with_encoder(mut self, encoder: Arc<dyn PasswordEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Override the stream that creation events are published to.
    pub fn with_event_stream(mut self, stream: impl Into<String>) -> Self {
        self.event_stream = stream.into();
        self
    }

    /// Get a user by ID, failing with `NotFound` if absent.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn find_user_by_id(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("no user with id {}", id)))
    }

    /// Get a user by username, failing with `NotFound` if absent.
    pub async fn find_by_username(&self, username: &str) -> UserResult<User> {
        self.repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("no user with username '{}'", username)))
    }

    /// Get a user by email, failing with `NotFound` if absent.
    pub async fn find_by_email(&self, email: &str) -> UserResult<User> {
        self.repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("no user with email '{}'", email)))
    }

    pub async fn exists_by_username(&self, username: &str) -> UserResult<bool> {
        self.repository.username_exists(username).await
    }

    pub async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        self.repository.email_exists(email).await
    }

    /// Create a user account.
    ///
    /// The supplied role becomes the account's sole role, the password is
    /// encoded before anything is persisted, and user + role are flushed in
    /// one transaction so the returned user carries its storage-assigned id.
    /// One `UserCreatedEvent` is published per successful creation, after
    /// the flush.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: CreateUser, role: RoleName) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let password_hash = self.encoder.encode(&input.password)?;

        let created = self
            .repository
            .create(NewUser {
                username: input.username,
                email: input.email,
                password_hash,
                role,
            })
            .await?;

        self.publish_created(&created).await;

        Ok(created)
    }

    /// Update a user's username and password.
    ///
    /// The new password is re-encoded. Email, roles, and bookings are left
    /// untouched; they are not reachable through this operation.
    #[instrument(skip(self, patch), fields(user_id = %id))]
    pub async fn update_user(&self, id: i64, patch: UpdateUser) -> UserResult<User> {
        patch
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut user = self.find_user_by_id(id).await?;

        user.username = patch.username;
        user.password_hash = self.encoder.encode(&patch.password)?;

        self.repository.update(user).await
    }

    /// Delete a user by ID, failing with `NotFound` if absent.
    ///
    /// Owned roles and bookings are removed by the repository cascade.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user_by_id(&self, id: i64) -> UserResult<()> {
        self.find_user_by_id(id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Best-effort emission of the creation event.
    ///
    /// The user row is already committed when this runs; failures are
    /// logged and swallowed, never surfaced to the caller.
    async fn publish_created(&self, user: &User) {
        let event = UserCreatedEvent::from(user);

        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(user_id = user.id, error = %err, "Failed to serialize user created event");
                return;
            }
        };

        if let Err(err) = self.publisher.publish(&self.event_stream, payload).await {
            warn!(user_id = user.id, error = %err, "Failed to publish user created event");
        }
    }
}
