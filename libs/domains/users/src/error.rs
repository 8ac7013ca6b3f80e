use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    /// Lookup by id/username/email found no row; the message identifies
    /// the missing key.
    #[error("user not found: {0}")]
    NotFound(String),

    #[error("user with username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("password hashing error: {0}")]
    PasswordHash(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Database(err.to_string())
    }
}
