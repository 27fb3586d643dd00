//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a booking together with its customer and vehicle.
///
/// Convenience method that creates a customer, an available vehicle, and an
/// active booking referencing them, all with default values. Note that the
/// vehicle is left `available`; tests exercising the availability invariant
/// should book through the service or set the status explicitly.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((customer, vehicle, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::user::create_customer(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db).await?;
    let booking = crate::factory::booking::create_booking(db, customer.id, vehicle.id).await?;

    Ok((customer, vehicle, booking))
}
