use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No user id in the session; the request carries no verified identity.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// The session references a user id that no longer exists.
    ///
    /// Happens when an account is deleted while one of its sessions is live.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login failed; deliberately does not say which factor was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The verified identity is not allowed to perform the requested action.
    ///
    /// # Fields
    /// - Detail for server-side logging; the client sees a generic message
    #[error("{0}")]
    Forbidden(String),

    /// A customer tried to cancel at or after the rental start.
    #[error("Bookings can only be cancelled before the rental start date")]
    CancellationWindowClosed,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `Forbidden` → 403 Forbidden with a generic message (detail is logged)
/// - `CancellationWindowClosed` → 403 Forbidden with the window message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized: please log in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden(detail) => {
                tracing::debug!("Forbidden: {}", detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Forbidden: you don't have permission to perform this action"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CancellationWindowClosed => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Bookings can only be cancelled before the rental start date"
                        .to_string(),
                }),
            )
                .into_response(),
        }
    }
}
