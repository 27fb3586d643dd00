//! Booking DTOs and parameter models.
//!
//! Rent dates travel as strings on the wire and are rendered back as
//! calendar dates (`YYYY-MM-DD`) in responses, matching the rental contract
//! of whole-day pricing.

use chrono::{DateTime, Utc};
use entity::{booking::BookingStatus, vehicle::VehicleType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::util::parse::format_calendar_date;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub vehicle_id: i32,
    /// Calendar date (`2024-01-01`) or RFC 3339 timestamp.
    pub rent_start_date: String,
    pub rent_end_date: String,
    /// Ignored for customers; their own id is always used. Admins may book
    /// on behalf of a customer by setting it.
    pub customer_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    /// Target status, either `cancelled` or `returned`.
    #[schema(value_type = String, example = "cancelled")]
    pub status: BookingStatus,
}

/// Validated creation request after the gate has pinned the customer id.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: String,
    pub rent_end_date: String,
}

/// Row values for the booking insert; dates parsed, price computed.
#[derive(Debug, Clone)]
pub struct NewBookingRow {
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: DateTime<Utc>,
    pub rent_end_date: DateTime<Utc>,
    pub total_price: f64,
}

/// Vehicle summary attached to a freshly created booking.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookedVehicleDto {
    pub vehicle_name: String,
    pub daily_rent_price: f64,
}

/// Response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CreatedBookingDto {
    pub id: i32,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: String,
    pub rent_end_date: String,
    pub total_price: f64,
    #[schema(value_type = String, example = "active")]
    pub status: BookingStatus,
    pub vehicle: BookedVehicleDto,
}

impl CreatedBookingDto {
    pub fn from_entity(entity: entity::booking::Model, vehicle: &entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            vehicle_id: entity.vehicle_id,
            rent_start_date: format_calendar_date(&entity.rent_start_date),
            rent_end_date: format_calendar_date(&entity.rent_end_date),
            total_price: entity.total_price,
            status: entity.status,
            vehicle: BookedVehicleDto {
                vehicle_name: vehicle.vehicle_name.clone(),
                daily_rent_price: vehicle.daily_rent_price,
            },
        }
    }
}

/// Compact customer summary on booking listings.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CustomerSummaryDto {
    pub name: String,
    pub email: String,
}

/// Compact vehicle summary on booking listings.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VehicleSummaryDto {
    pub vehicle_name: String,
    pub registration_number: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "car")]
    pub vehicle_type: VehicleType,
}

/// Booking enriched with customer and vehicle summaries for read endpoints.
///
/// Summaries are `None` when the referenced row has disappeared, which can
/// only happen for data pre-dating the referential checks.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookingDetailDto {
    pub id: i32,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: String,
    pub rent_end_date: String,
    pub total_price: f64,
    #[schema(value_type = String, example = "active")]
    pub status: BookingStatus,
    pub customer: Option<CustomerSummaryDto>,
    pub vehicle: Option<VehicleSummaryDto>,
}

impl BookingDetailDto {
    pub fn from_entity(
        entity: entity::booking::Model,
        customer: Option<&entity::user::Model>,
        vehicle: Option<&entity::vehicle::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            vehicle_id: entity.vehicle_id,
            rent_start_date: format_calendar_date(&entity.rent_start_date),
            rent_end_date: format_calendar_date(&entity.rent_end_date),
            total_price: entity.total_price,
            status: entity.status,
            customer: customer.map(|c| CustomerSummaryDto {
                name: c.name.clone(),
                email: c.email.clone(),
            }),
            vehicle: vehicle.map(|v| VehicleSummaryDto {
                vehicle_name: v.vehicle_name.clone(),
                registration_number: v.registration_number.clone(),
                vehicle_type: v.vehicle_type,
            }),
        }
    }
}

/// Vehicle availability echoed back when a close released the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VehicleAvailabilityDto {
    pub availability_status: String,
}

/// Response for a booking status update.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UpdatedBookingDto {
    pub id: i32,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub rent_start_date: String,
    pub rent_end_date: String,
    pub total_price: f64,
    #[schema(value_type = String, example = "returned")]
    pub status: BookingStatus,
    /// Present when this update released the vehicle back to `available`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleAvailabilityDto>,
}

impl UpdatedBookingDto {
    pub fn from_entity(entity: entity::booking::Model, vehicle_released: bool) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            vehicle_id: entity.vehicle_id,
            rent_start_date: format_calendar_date(&entity.rent_start_date),
            rent_end_date: format_calendar_date(&entity.rent_end_date),
            total_price: entity.total_price,
            status: entity.status,
            vehicle: vehicle_released.then(|| VehicleAvailabilityDto {
                availability_status: "available".to_string(),
            }),
        }
    }
}
