//! Entity factories for building test data.
//!
//! Each factory creates one entity with sensible defaults that individual
//! tests can override through a builder interface. Factories insert directly
//! through SeaORM active models so tests can set up states the application
//! services would never produce (for example, inconsistent availability).

pub mod booking;
pub mod helpers;
pub mod user;
pub mod vehicle;

pub use booking::{create_booking, BookingFactory};
pub use helpers::create_booking_with_dependencies;
pub use user::{create_admin, create_customer, UserFactory};
pub use vehicle::{create_vehicle, VehicleFactory};
