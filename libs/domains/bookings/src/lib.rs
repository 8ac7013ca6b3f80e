//! Bookings Domain
//!
//! CRUD glue for bookings. Every booking belongs to exactly one user; the
//! users domain owns the cascade that removes bookings when their owner is
//! deleted.

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BookingError, BookingResult};
pub use models::{Booking, CreateBooking, UpdateBooking};
pub use postgres::PgBookingRepository;
pub use repository::{BookingRepository, InMemoryBookingRepository};
pub use service::BookingService;
