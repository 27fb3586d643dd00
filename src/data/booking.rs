//! Booking data repository for database operations.
//!
//! Holds the write primitives the booking engine and the auto-return sweep
//! are built from. Status writes are conditional updates guarded on the row
//! still being `active`, which is what makes concurrent closes lose cleanly
//! instead of double-applying.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::booking::BookingStatus;

use crate::model::booking::NewBookingRow;

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking row in `active` state.
    ///
    /// Must run inside the same transaction as the vehicle claim.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, row: NewBookingRow) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            customer_id: ActiveValue::Set(row.customer_id),
            vehicle_id: ActiveValue::Set(row.vehicle_id),
            rent_start_date: ActiveValue::Set(row.rent_start_date),
            rent_end_date: ActiveValue::Set(row.rent_end_date),
            total_price: ActiveValue::Set(row.total_price),
            status: ActiveValue::Set(BookingStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a booking by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Returns all bookings ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns a customer's bookings ordered by id.
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Closes an active booking, moving it to `cancelled` or `returned`.
    ///
    /// The update is guarded on `status = 'active'`, so if a concurrent close
    /// (admin return, customer cancel, or the auto-return sweep) already won,
    /// zero rows are affected and the caller must treat the transition as
    /// invalid rather than re-applying side effects.
    ///
    /// # Arguments
    /// - `id` - Booking to close
    /// - `status` - Target status, `Cancelled` or `Returned`
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when this call performed the transition, 0 otherwise
    /// - `Err(DbErr)` - Database error during update
    pub async fn close_active(&self, id: i32, status: BookingStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .col_expr(entity::booking::Column::Status, Expr::value(status))
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether any active booking still references the vehicle.
    ///
    /// Run inside the closing transaction, this is the check-then-act half of
    /// the availability release: the vehicle is freed exactly when this
    /// returns `false`.
    pub async fn has_active_for_vehicle(&self, vehicle_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::VehicleId.eq(vehicle_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the customer holds any active booking.
    ///
    /// Gates user deletion.
    pub async fn has_active_for_customer(&self, customer_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::CustomerId.eq(customer_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns active bookings whose rental period has ended.
    ///
    /// # Arguments
    /// - `now` - Cutoff instant; bookings with `rent_end_date < now` match
    pub async fn find_expired_active(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .filter(entity::booking::Column::RentEndDate.lt(now))
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Flips all expired active bookings to `returned`.
    ///
    /// Same guard as `close_active`: rows another writer already closed are
    /// simply not matched, which is what makes the sweep idempotent.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of bookings this call returned
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_expired_returned(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active))
            .filter(entity::booking::Column::RentEndDate.lt(now))
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Returned),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
