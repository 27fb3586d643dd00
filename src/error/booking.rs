use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the booking engine.
///
/// These are rejections of the requested operation; none of them leaves a
/// partial write behind. Anything issued inside the same transaction before
/// the rejection is rolled back.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Rent dates were missing, unparseable, or end is not after start.
    #[error("Invalid rent dates")]
    InvalidDateRange,

    /// The requested vehicle does not exist.
    #[error("Vehicle not found")]
    VehicleNotFound,

    /// The vehicle is not `available` at commit time. Also the error the
    /// loser of two concurrent create attempts observes.
    #[error("Vehicle is not available")]
    VehicleUnavailable,

    /// The requested booking does not exist.
    #[error("Booking not found")]
    BookingNotFound,

    /// The booking is not `active`; closed bookings cannot transition again.
    #[error("Only active bookings can be updated")]
    InvalidTransition,
}

/// Converts booking errors into HTTP responses.
///
/// - `InvalidDateRange` → 400 Bad Request
/// - `VehicleNotFound` / `BookingNotFound` → 404 Not Found
/// - `VehicleUnavailable` / `InvalidTransition` → 409 Conflict
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange => StatusCode::BAD_REQUEST,
            Self::VehicleNotFound | Self::BookingNotFound => StatusCode::NOT_FOUND,
            Self::VehicleUnavailable | Self::InvalidTransition => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
