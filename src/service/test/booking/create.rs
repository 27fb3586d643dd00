use super::*;

/// Tests the whole-day pricing path.
///
/// Three calendar days at 100.0 per day price at 300.0, the booking comes
/// back active, and the vehicle flips to booked.
#[tokio::test]
async fn creates_booking_and_claims_vehicle() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();
    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .daily_rent_price(100.0)
        .build()
        .await
        .unwrap();

    let booking = BookingService::new(db)
        .create(params(customer.id, vehicle.id, "2099-01-01", "2099-01-04"))
        .await
        .unwrap();

    assert_eq!(booking.total_price, 300.0);
    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.rent_start_date, "2099-01-01");
    assert_eq!(booking.rent_end_date, "2099-01-04");
    assert_eq!(booking.vehicle.daily_rent_price, 100.0);

    assert_eq!(vehicle_status(db, vehicle.id).await, AvailabilityStatus::Booked);
}

/// Tests that a partial day bills as a full day.
///
/// A 25 hour span prices as two days.
#[tokio::test]
async fn rounds_partial_days_up() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();
    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .daily_rent_price(100.0)
        .build()
        .await
        .unwrap();

    let booking = BookingService::new(db)
        .create(params(
            customer.id,
            vehicle.id,
            "2099-01-01T00:00:00Z",
            "2099-01-02T01:00:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(booking.total_price, 200.0);
}

/// Tests date validation.
///
/// Expected: Err(InvalidDateRange) for reversed, equal, and unparseable dates
#[tokio::test]
async fn rejects_invalid_date_ranges() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();
    let vehicle = factory::vehicle::create_vehicle(db).await.unwrap();

    let service = BookingService::new(db);

    for (start, end) in [
        ("2099-01-04", "2099-01-01"),
        ("2099-01-01", "2099-01-01"),
        ("not a date", "2099-01-04"),
        ("2099-01-01", "also not a date"),
    ] {
        let result = service.create(params(customer.id, vehicle.id, start, end)).await;
        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::InvalidDateRange))
        ));
    }

    // Nothing was claimed by the rejected attempts.
    assert_eq!(vehicle_status(db, vehicle.id).await, AvailabilityStatus::Available);
}

/// Tests booking a vehicle that does not exist.
///
/// Expected: Err(VehicleNotFound)
#[tokio::test]
async fn rejects_missing_vehicle() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();

    let result = BookingService::new(db)
        .create(params(customer.id, 9999, "2099-01-01", "2099-01-04"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::VehicleNotFound))
    ));
}

/// Tests booking for a customer that does not exist.
///
/// Expected: Err(NotFound) and the vehicle is left available
#[tokio::test]
async fn rejects_missing_customer() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await.unwrap();

    let result = BookingService::new(db)
        .create(params(9999, vehicle.id, "2099-01-01", "2099-01-04"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(vehicle_status(db, vehicle.id).await, AvailabilityStatus::Available);
}

/// Tests booking a vehicle that is already booked.
///
/// The second creation for the same vehicle must fail and leave exactly one
/// booking row behind.
///
/// Expected: Err(VehicleUnavailable)
#[tokio::test]
async fn rejects_unavailable_vehicle() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_customer(db).await.unwrap();
    let second = factory::user::create_customer(db).await.unwrap();
    let vehicle = factory::vehicle::create_vehicle(db).await.unwrap();

    let service = BookingService::new(db);

    service
        .create(params(first.id, vehicle.id, "2099-01-01", "2099-01-04"))
        .await
        .unwrap();

    let result = service
        .create(params(second.id, vehicle.id, "2099-02-01", "2099-02-04"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::VehicleUnavailable))
    ));

    let bookings = entity::prelude::Booking::find().all(db).await.unwrap();
    assert_eq!(bookings.len(), 1);
}
