//! Vehicle DTOs and parameter models.
//!
//! `availability_status` appears in responses but never in request payloads;
//! the booking service is its only writer.

use entity::vehicle::{AvailabilityStatus, VehicleType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub vehicle_name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "car")]
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
    #[schema(value_type = String, example = "available")]
    pub availability_status: AvailabilityStatus,
}

impl VehicleDto {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_name: entity.vehicle_name,
            vehicle_type: entity.vehicle_type,
            registration_number: entity.registration_number,
            daily_rent_price: entity.daily_rent_price,
            availability_status: entity.availability_status,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub vehicle_name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "car")]
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVehicleDto {
    pub vehicle_name: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub vehicle_type: Option<VehicleType>,
    pub registration_number: Option<String>,
    pub daily_rent_price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub vehicle_name: String,
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub daily_rent_price: f64,
}

impl CreateVehicleParams {
    pub fn from_dto(dto: CreateVehicleDto) -> Self {
        Self {
            vehicle_name: dto.vehicle_name,
            vehicle_type: dto.vehicle_type,
            registration_number: dto.registration_number,
            daily_rent_price: dto.daily_rent_price,
        }
    }
}

/// Partial vehicle update. Deliberately has no availability field.
#[derive(Debug, Clone)]
pub struct UpdateVehicleParams {
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub registration_number: Option<String>,
    pub daily_rent_price: Option<f64>,
}

impl UpdateVehicleParams {
    pub fn from_dto(dto: UpdateVehicleDto) -> Self {
        Self {
            vehicle_name: dto.vehicle_name,
            vehicle_type: dto.vehicle_type,
            registration_number: dto.registration_number,
            daily_rent_price: dto.daily_rent_price,
        }
    }
}
