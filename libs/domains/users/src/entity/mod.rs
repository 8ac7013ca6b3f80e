//! SeaORM entities for the users domain.

pub mod role;
pub mod user;
