//! Business logic services
//!
//! Services validate input, coordinate repositories, and resolve every
//! outcome to an `ApiError` for the response normalizer.

pub mod catway;
pub mod reservation;
pub mod user;

pub use catway::CatwayService;
pub use reservation::ReservationService;
pub use user::UserService;
