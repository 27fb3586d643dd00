use super::*;

/// Tests that a freshly created vehicle starts out available.
///
/// Expected: Ok with availability_status available
#[tokio::test]
async fn creates_available_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = VehicleRepository::new(db)
        .create(CreateVehicleParams {
            vehicle_name: "Corolla".to_string(),
            vehicle_type: VehicleType::Car,
            registration_number: "ABC-123".to_string(),
            daily_rent_price: 80.0,
        })
        .await?;

    assert_eq!(vehicle.vehicle_name, "Corolla");
    assert_eq!(vehicle.availability_status, AvailabilityStatus::Available);
    assert_eq!(vehicle.daily_rent_price, 80.0);

    Ok(())
}

/// Tests that a duplicate registration number is rejected by the unique index.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_registration_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let params = CreateVehicleParams {
        vehicle_name: "Corolla".to_string(),
        vehicle_type: VehicleType::Car,
        registration_number: "ABC-123".to_string(),
        daily_rent_price: 80.0,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
