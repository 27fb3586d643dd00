use super::*;

/// Tests releasing a booked vehicle back to available.
///
/// Expected: Ok(1) and the vehicle is available afterwards
#[tokio::test]
async fn releases_booked_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .availability_status(AvailabilityStatus::Booked)
        .build()
        .await?;

    let rows = VehicleRepository::new(db).release(vehicle.id).await?;

    assert_eq!(rows, 1);

    let db_vehicle = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_vehicle.availability_status, AvailabilityStatus::Available);

    Ok(())
}

/// Tests releasing a vehicle that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn release_of_missing_vehicle_returns_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = VehicleRepository::new(db).release(9999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
