use super::*;

/// Tests claiming an available vehicle.
///
/// Expected: Ok(true) and the vehicle is booked afterwards
#[tokio::test]
async fn claims_available_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let claimed = VehicleRepository::new(db).claim(vehicle.id).await?;

    assert!(claimed);

    let db_vehicle = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_vehicle.availability_status, AvailabilityStatus::Booked);

    Ok(())
}

/// Tests that a second claim of the same vehicle loses.
///
/// The first claim flips the row; the guarded update of the second matches
/// nothing.
///
/// Expected: Ok(false) on the second claim
#[tokio::test]
async fn second_claim_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.claim(vehicle.id).await?);
    assert!(!repo.claim(vehicle.id).await?);

    Ok(())
}

/// Tests claiming a vehicle that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn claim_of_missing_vehicle_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let claimed = VehicleRepository::new(db).claim(9999).await?;

    assert!(!claimed);

    Ok(())
}
