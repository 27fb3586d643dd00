//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations for each domain entity. They are
//! generic over `ConnectionTrait` so services can run them either against the
//! shared pool or inside a transaction; everything touching the availability
//! invariant must go through a transaction.

pub mod booking;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
