//! Fleet management operations.
//!
//! Plain CRUD; `availability_status` is out of reach here on purpose. It is
//! written exclusively by the booking service and the auto-return sweep.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{booking::BookingRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams, VehicleDto},
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a vehicle to the fleet, initially available.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The created vehicle
    /// - `Err(AppError::BadRequest)` - Non-positive daily price
    /// - `Err(AppError::Conflict)` - Registration number already in the fleet
    pub async fn create(&self, params: CreateVehicleParams) -> Result<VehicleDto, AppError> {
        if params.daily_rent_price <= 0.0 {
            return Err(AppError::BadRequest(
                "daily_rent_price must be positive".to_string(),
            ));
        }

        let repo = VehicleRepository::new(self.db);

        if repo
            .find_by_registration(&params.registration_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Registration number already registered".to_string(),
            ));
        }

        let vehicle = repo.create(params).await?;

        Ok(VehicleDto::from_entity(vehicle))
    }

    /// Returns the whole fleet.
    pub async fn get_all(&self) -> Result<Vec<VehicleDto>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from_entity).collect())
    }

    /// Returns one vehicle, or `None` when absent.
    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleDto>, AppError> {
        let vehicle = VehicleRepository::new(self.db).find_by_id(vehicle_id).await?;

        Ok(vehicle.map(VehicleDto::from_entity))
    }

    /// Updates a vehicle's descriptive fields.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The updated vehicle
    /// - `Err(AppError::BadRequest)` - Non-positive daily price
    /// - `Err(AppError::NotFound)` - No vehicle with that id
    pub async fn update(
        &self,
        vehicle_id: i32,
        params: UpdateVehicleParams,
    ) -> Result<VehicleDto, AppError> {
        if matches!(params.daily_rent_price, Some(price) if price <= 0.0) {
            return Err(AppError::BadRequest(
                "daily_rent_price must be positive".to_string(),
            ));
        }

        let updated = VehicleRepository::new(self.db)
            .update(vehicle_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleDto::from_entity(updated))
    }

    /// Removes a vehicle from the fleet.
    ///
    /// Refused while any active booking references it; the check and delete
    /// share a transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Vehicle deleted
    /// - `Err(AppError::Conflict)` - Vehicle still has an active booking
    /// - `Err(AppError::NotFound)` - No vehicle with that id
    pub async fn delete(&self, vehicle_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if BookingRepository::new(&txn)
            .has_active_for_vehicle(vehicle_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Cannot delete vehicle with active bookings".to_string(),
            ));
        }

        let rows = VehicleRepository::new(&txn).delete(vehicle_id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}
