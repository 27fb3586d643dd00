pub mod auth;
pub mod booking;
pub mod user;
pub mod vehicle;
