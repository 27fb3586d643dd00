use super::*;

/// Tests a partial update touching only the price.
///
/// Expected: Ok(Some) with the price changed and everything else untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .daily_rent_price(50.0)
        .build()
        .await?;

    let updated = VehicleRepository::new(db)
        .update(
            vehicle.id,
            UpdateVehicleParams {
                vehicle_name: None,
                vehicle_type: None,
                registration_number: None,
                daily_rent_price: Some(75.0),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.daily_rent_price, 75.0);
    assert_eq!(updated.vehicle_name, vehicle.vehicle_name);
    assert_eq!(updated.registration_number, vehicle.registration_number);

    Ok(())
}

/// Tests that updates cannot change availability.
///
/// The update parameters carry no availability field; a booked vehicle stays
/// booked through a descriptive update.
///
/// Expected: Ok(Some) with availability unchanged
#[tokio::test]
async fn leaves_availability_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .availability_status(AvailabilityStatus::Booked)
        .build()
        .await?;

    let updated = VehicleRepository::new(db)
        .update(
            vehicle.id,
            UpdateVehicleParams {
                vehicle_name: Some("Renamed".to_string()),
                vehicle_type: Some(VehicleType::Van),
                registration_number: None,
                daily_rent_price: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.vehicle_name, "Renamed");
    assert_eq!(updated.vehicle_type, VehicleType::Van);
    assert_eq!(updated.availability_status, AvailabilityStatus::Booked);

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleRepository::new(db)
        .update(
            9999,
            UpdateVehicleParams {
                vehicle_name: Some("Ghost".to_string()),
                vehicle_type: None,
                registration_number: None,
                daily_rent_price: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
