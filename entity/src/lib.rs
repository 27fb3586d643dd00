pub mod prelude;

pub mod booking;
pub mod user;
pub mod vehicle;
