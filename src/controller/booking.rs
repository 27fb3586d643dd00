use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{Actor, AuthGuard},
    model::{
        api::ErrorDto,
        booking::{
            BookingDetailDto, CreateBookingDto, CreateBookingParams, CreatedBookingDto,
            UpdateBookingStatusDto, UpdatedBookingDto,
        },
    },
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Create a booking.
///
/// Books the vehicle for the given rental period and claims it in the same
/// transaction. The price is the daily rate times the number of rental
/// days, with partial days rounded up. Customers always book for
/// themselves; admins may set `customer_id` to book on a customer's behalf.
///
/// # Access Control
/// - `Customer` - Books for themselves; `customer_id` in the payload is ignored
/// - `Admin` - May book on behalf of any customer
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Booking data (vehicle, rental period, optional customer)
///
/// # Returns
/// - `201 Created` - Successfully created booking
/// - `400 Bad Request` - Unparseable dates or end not after start
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Vehicle or customer does not exist
/// - `409 Conflict` - Vehicle is not available
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = CreatedBookingDto),
        (status = 400, description = "Invalid rent dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Vehicle or customer does not exist", body = ErrorDto),
        (status = 409, description = "Vehicle is not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;
    let actor = Actor::from_user(&caller);

    // Customers book for themselves regardless of what the payload says.
    let customer_id = if actor.is_admin() {
        payload.customer_id.unwrap_or(actor.id)
    } else {
        actor.id
    };

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams {
            customer_id,
            vehicle_id: payload.vehicle_id,
            rent_start_date: payload.rent_start_date,
            rent_end_date: payload.rent_end_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// List bookings.
///
/// Admins see every booking; customers see only their own. Each booking
/// carries compact customer and vehicle summaries.
///
/// # Access Control
/// - `Admin` - All bookings
/// - `Customer` - Own bookings only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - Bookings visible to the caller
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings visible to the caller", body = Vec<BookingDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;
    let actor = Actor::from_user(&caller);

    let service = BookingService::new(&state.db);

    let bookings = if actor.is_admin() {
        service.get_all().await?
    } else {
        service.get_by_customer(actor.id).await?
    };

    Ok(Json(bookings))
}

/// Get one booking.
///
/// # Access Control
/// - `Admin` - Any booking
/// - `Customer` - Own bookings only
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `booking_id` - Booking to fetch
///
/// # Returns
/// - `200 OK` - The booking with customer and vehicle summaries
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Customer reading someone else's booking
/// - `404 Not Found` - No booking with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking to fetch")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Customer reading someone else's booking", body = ErrorDto),
        (status = 404, description = "No booking with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;
    let actor = Actor::from_user(&caller);

    let booking = BookingService::new(&state.db)
        .get_by_id(&actor, booking_id)
        .await?;

    Ok(Json(booking))
}

/// Close an active booking.
///
/// Moves the booking to `cancelled` or `returned`. Customers may cancel
/// their own bookings strictly before the rental starts; only admins may
/// mark a booking as returned. When the closed booking was the vehicle's
/// last active one, the vehicle becomes available again and the response
/// says so.
///
/// # Access Control
/// - `Customer` - Cancel own bookings before the rental starts
/// - `Admin` - Mark any active booking as returned
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `booking_id` - Booking to close
/// - `payload` - Target status, `cancelled` or `returned`
///
/// # Returns
/// - `200 OK` - The closed booking
/// - `400 Bad Request` - Target status is `active`
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Role, ownership, or cancellation window violation
/// - `404 Not Found` - No booking with that id
/// - `409 Conflict` - Booking is no longer active
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking to close")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "The closed booking", body = UpdatedBookingDto),
        (status = 400, description = "Target status is 'active'", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role, ownership, or cancellation window violation", body = ErrorDto),
        (status = 404, description = "No booking with that id", body = ErrorDto),
        (status = 409, description = "Booking is no longer active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;
    let actor = Actor::from_user(&caller);

    let booking = BookingService::new(&state.db)
        .update_status(&actor, booking_id, payload.status)
        .await?;

    Ok(Json(booking))
}
