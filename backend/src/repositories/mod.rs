//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod catway;
pub mod reservation;
pub mod user;

pub use catway::{CatwayRepository, CreateCatwayFields, UpdateCatwayFields};
pub use reservation::{CreateReservationFields, ReservationRepository};
pub use user::{UpdateUserFields, UserRepository};
