use super::*;

/// Tests that only active bookings past their end date match.
///
/// Expected: the expired active booking is returned; future and closed
/// bookings are not
#[tokio::test]
async fn finds_only_expired_active_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await?;
    let now = Utc::now();

    let expired_vehicle = factory::vehicle::create_vehicle(db).await?;
    let expired = factory::booking::BookingFactory::new(db, customer.id, expired_vehicle.id)
        .rent_start_date(now - Duration::days(5))
        .rent_end_date(now - Duration::days(1))
        .build()
        .await?;

    let future_vehicle = factory::vehicle::create_vehicle(db).await?;
    factory::booking::create_booking(db, customer.id, future_vehicle.id).await?;

    let closed_vehicle = factory::vehicle::create_vehicle(db).await?;
    factory::booking::BookingFactory::new(db, customer.id, closed_vehicle.id)
        .rent_start_date(now - Duration::days(5))
        .rent_end_date(now - Duration::days(1))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let matches = BookingRepository::new(db).find_expired_active(now).await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, expired.id);

    Ok(())
}

/// Tests flipping expired active bookings to returned.
///
/// Expected: Ok(1) on the first run, Ok(0) on the second
#[tokio::test]
async fn marks_expired_bookings_returned_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let now = Utc::now();

    let booking = factory::booking::BookingFactory::new(db, customer.id, vehicle.id)
        .rent_start_date(now - Duration::days(3))
        .rent_end_date(now - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    assert_eq!(repo.mark_expired_returned(now).await?, 1);
    assert_eq!(repo.mark_expired_returned(now).await?, 0);

    let db_booking = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_booking.status, BookingStatus::Returned);

    Ok(())
}

/// Tests that a booking ending exactly at the cutoff is not swept.
///
/// The sweep matches strictly earlier end dates.
///
/// Expected: Ok(0)
#[tokio::test]
async fn boundary_end_date_is_not_swept() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let now = Utc::now();

    factory::booking::BookingFactory::new(db, customer.id, vehicle.id)
        .rent_start_date(now - Duration::days(2))
        .rent_end_date(now)
        .build()
        .await?;

    assert_eq!(BookingRepository::new(db).mark_expired_returned(now).await?, 0);

    Ok(())
}
