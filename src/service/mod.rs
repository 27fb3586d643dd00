//! Business logic layer.
//!
//! Services validate input, enforce the booking/availability invariant, and
//! orchestrate repositories. Everything that must be atomic runs inside a
//! single SeaORM transaction opened here.

pub mod auth;
pub mod booking;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
