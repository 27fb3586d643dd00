//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Unlike the other factories, a booking requires an existing customer and
/// vehicle id; create those first (see `create_booking_with_dependencies`).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
/// use chrono::{Duration, Utc};
///
/// let expired = BookingFactory::new(&db, customer.id, vehicle.id)
///     .rent_start_date(Utc::now() - Duration::days(5))
///     .rent_end_date(Utc::now() - Duration::days(2))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    vehicle_id: i32,
    rent_start_date: DateTime<Utc>,
    rent_end_date: DateTime<Utc>,
    total_price: f64,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - rent_start_date: tomorrow
    /// - rent_end_date: three days from now
    /// - total_price: `100.0`
    /// - status: `Active`
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, vehicle_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            customer_id,
            vehicle_id,
            rent_start_date: now + Duration::days(1),
            rent_end_date: now + Duration::days(3),
            total_price: 100.0,
            status: BookingStatus::Active,
        }
    }

    pub fn rent_start_date(mut self, rent_start_date: DateTime<Utc>) -> Self {
        self.rent_start_date = rent_start_date;
        self
    }

    pub fn rent_end_date(mut self, rent_end_date: DateTime<Utc>) -> Self {
        self.rent_end_date = rent_end_date;
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            rent_start_date: ActiveValue::Set(self.rent_start_date),
            rent_end_date: ActiveValue::Set(self.rent_end_date),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking with default dates.
///
/// Shorthand for `BookingFactory::new(db, customer_id, vehicle_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    customer_id: i32,
    vehicle_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, customer_id, vehicle_id).build().await
}
