//! Vehicle data repository for database operations.
//!
//! Plain CRUD plus the two availability writes (`claim`, `release`) that the
//! booking service and the auto-return sweep use. Nothing else in the
//! application writes `availability_status`.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::vehicle::AvailabilityStatus;

use crate::model::vehicle::{CreateVehicleParams, UpdateVehicleParams};

/// Repository providing database operations for the vehicle fleet.
pub struct VehicleRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new VehicleRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle, initially `available`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created vehicle
    /// - `Err(DbErr)` - Database error, including duplicate registration numbers
    pub async fn create(
        &self,
        param: CreateVehicleParams,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();

        entity::vehicle::ActiveModel {
            vehicle_name: ActiveValue::Set(param.vehicle_name),
            vehicle_type: ActiveValue::Set(param.vehicle_type),
            registration_number: ActiveValue::Set(param.registration_number),
            daily_rent_price: ActiveValue::Set(param.daily_rent_price),
            availability_status: ActiveValue::Set(AvailabilityStatus::Available),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a vehicle by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Finds a vehicle by its registration number.
    pub async fn find_by_registration(
        &self,
        registration_number: &str,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::RegistrationNumber.eq(registration_number))
            .one(self.db)
            .await
    }

    /// Returns all vehicles ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Fetches vehicles for the given id set in one query.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Applies a partial update to a vehicle's descriptive fields.
    ///
    /// Availability is not touchable through this method.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated vehicle
    /// - `Ok(None)` - No vehicle with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateVehicleParams,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::vehicle::ActiveModel = existing.into();

        if let Some(vehicle_name) = param.vehicle_name {
            active.vehicle_name = ActiveValue::Set(vehicle_name);
        }
        if let Some(vehicle_type) = param.vehicle_type {
            active.vehicle_type = ActiveValue::Set(vehicle_type);
        }
        if let Some(registration_number) = param.registration_number {
            active.registration_number = ActiveValue::Set(registration_number);
        }
        if let Some(daily_rent_price) = param.daily_rent_price {
            active.daily_rent_price = ActiveValue::Set(daily_rent_price);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a vehicle by id.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vehicle::delete_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Atomically claims an available vehicle for a new booking.
    ///
    /// Issues a conditional update guarded on `availability_status =
    /// 'available'`, so of two concurrent claims for the same vehicle exactly
    /// one observes an affected row. Must run inside the same transaction as
    /// the booking insert.
    ///
    /// # Arguments
    /// - `id` - Vehicle to claim
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle was available and is now booked
    /// - `Ok(false)` - Vehicle was not available (or does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .filter(
                entity::vehicle::Column::AvailabilityStatus.eq(AvailabilityStatus::Available),
            )
            .col_expr(
                entity::vehicle::Column::AvailabilityStatus,
                Expr::value(AvailabilityStatus::Booked),
            )
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Releases a vehicle back to `available`.
    ///
    /// Callers must have verified, inside the same transaction, that no
    /// active booking still references the vehicle.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn release(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .col_expr(
                entity::vehicle::Column::AvailabilityStatus,
                Expr::value(AvailabilityStatus::Available),
            )
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
