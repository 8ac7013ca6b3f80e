use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking not found: {0}")]
    NotFound(i64),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl From<sea_orm::DbErr> for BookingError {
    fn from(err: sea_orm::DbErr) -> Self {
        BookingError::Database(err.to_string())
    }
}
