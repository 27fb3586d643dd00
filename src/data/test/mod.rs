mod booking;
mod user;
mod vehicle;
