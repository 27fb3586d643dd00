use super::*;

/// Tests inserting a booking row.
///
/// Expected: Ok with the booking active and all values persisted
#[tokio::test]
async fn inserts_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await?;
    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let start = Utc::now() + Duration::days(1);
    let end = Utc::now() + Duration::days(4);

    let booking = BookingRepository::new(db)
        .insert(NewBookingRow {
            customer_id: customer.id,
            vehicle_id: vehicle.id,
            rent_start_date: start,
            rent_end_date: end,
            total_price: 150.0,
        })
        .await?;

    assert_eq!(booking.customer_id, customer.id);
    assert_eq!(booking.vehicle_id, vehicle.id);
    assert_eq!(booking.status, BookingStatus::Active);
    assert_eq!(booking.total_price, 150.0);

    let db_booking = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?;
    assert!(db_booking.is_some());

    Ok(())
}
