//! Users Domain
//!
//! User accounts with owned roles, credential encoding, and "user created"
//! event emission.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, password encoding, event emission
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory + Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Entities   │  ← SeaORM models (users, roles)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     models::{CreateUser, RoleName},
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//! use messaging::InMemoryPublisher;
//!
//! # async fn example() {
//! let service = UserService::new(InMemoryUserRepository::new(), InMemoryPublisher::new());
//!
//! let user = service
//!     .create_user(
//!         CreateUser {
//!             username: "alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!             password: "secret".to_string(),
//!         },
//!         RoleName::Admin,
//!     )
//!     .await
//!     .unwrap();
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod events;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod streams;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use events::UserCreatedEvent;
pub use models::{CreateUser, NewUser, Role, RoleName, UpdateUser, User};
pub use password::{Argon2PasswordEncoder, PasswordEncoder};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use streams::UserEventStream;
