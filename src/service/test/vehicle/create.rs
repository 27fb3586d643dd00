use super::*;

fn create_params(registration: &str) -> CreateVehicleParams {
    CreateVehicleParams {
        vehicle_name: "Corolla".to_string(),
        vehicle_type: VehicleType::Car,
        registration_number: registration.to_string(),
        daily_rent_price: 80.0,
    }
}

/// Tests adding a vehicle to the fleet.
///
/// Expected: Ok with the vehicle available
#[tokio::test]
async fn creates_vehicle() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = VehicleService::new(db)
        .create(create_params("ABC-123"))
        .await
        .unwrap();

    assert_eq!(vehicle.registration_number, "ABC-123");
    assert_eq!(
        vehicle.availability_status,
        entity::vehicle::AvailabilityStatus::Available
    );
}

/// Tests reusing a registration number.
///
/// Expected: Err(Conflict) on the second create
#[tokio::test]
async fn rejects_duplicate_registration() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VehicleService::new(db);
    service.create(create_params("ABC-123")).await.unwrap();

    let result = service.create(create_params("ABC-123")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

/// Tests a non-positive daily price.
///
/// Expected: Err(BadRequest) for both create and update
#[tokio::test]
async fn rejects_non_positive_price() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = VehicleService::new(db);

    let result = service
        .create(CreateVehicleParams {
            daily_rent_price: 0.0,
            ..create_params("ABC-123")
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let vehicle = factory::vehicle::create_vehicle(db).await.unwrap();
    let result = service
        .update(
            vehicle.id,
            UpdateVehicleParams {
                vehicle_name: None,
                vehicle_type: None,
                registration_number: None,
                daily_rent_price: Some(-5.0),
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
