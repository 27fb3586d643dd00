//! DTOs and parameter models.
//!
//! DTOs are the JSON shapes exchanged with clients; parameter models carry
//! validated values from controllers into services and repositories. Entity
//! models never cross the API boundary directly (they carry password hashes).

pub mod api;
pub mod booking;
pub mod user;
pub mod vehicle;
