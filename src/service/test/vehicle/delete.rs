use super::*;

/// Tests deleting a vehicle that still has an active booking.
///
/// Expected: Err(Conflict) with the vehicle still present
#[tokio::test]
async fn refuses_while_booking_is_active() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle, _) = factory::helpers::create_booking_with_dependencies(db)
        .await
        .unwrap();

    let result = VehicleService::new(db).delete(vehicle.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let still_there = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await
        .unwrap();
    assert!(still_there.is_some());
}

/// Tests deleting a vehicle with no bookings.
///
/// Expected: Ok with the vehicle gone
#[tokio::test]
async fn deletes_vehicle_without_bookings() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await.unwrap();

    VehicleService::new(db).delete(vehicle.id).await.unwrap();

    let gone = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await
        .unwrap();
    assert!(gone.is_none());
}

/// Tests deleting a vehicle that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_vehicle() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleService::new(db).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
