use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{ErrorDto, MessageDto},
        vehicle::{
            CreateVehicleDto, CreateVehicleParams, UpdateVehicleDto, UpdateVehicleParams,
            VehicleDto,
        },
    },
    service::vehicle::VehicleService,
    state::AppState,
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Add a vehicle to the fleet.
///
/// The vehicle starts out `available`. Registration numbers are unique
/// across the fleet.
///
/// # Access Control
/// - `Admin` - Only admins can add vehicles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Vehicle data (name, type, registration number, daily price)
///
/// # Returns
/// - `201 Created` - Successfully added vehicle
/// - `400 Bad Request` - Non-positive daily price
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Registration number already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Successfully added vehicle", body = VehicleDto),
        (status = 400, description = "Non-positive daily price", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Registration number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let vehicle = VehicleService::new(&state.db)
        .create(CreateVehicleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// List the whole fleet.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - All vehicles with their availability
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles", body = Vec<VehicleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_vehicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let vehicles = VehicleService::new(&state.db).get_all().await?;

    Ok(Json(vehicles))
}

/// Get one vehicle.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `vehicle_id` - Vehicle to fetch
///
/// # Returns
/// - `200 OK` - The vehicle
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No vehicle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle to fetch")
    ),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No vehicle with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let vehicle = VehicleService::new(&state.db)
        .get_by_id(vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    Ok(Json(vehicle))
}

/// Update a vehicle's descriptive fields.
///
/// Availability cannot be set through this endpoint; it is driven entirely
/// by the booking lifecycle.
///
/// # Access Control
/// - `Admin` - Only admins can update vehicles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `vehicle_id` - Vehicle to update
/// - `payload` - Fields to change; omitted fields are untouched
///
/// # Returns
/// - `200 OK` - The updated vehicle
/// - `400 Bad Request` - Non-positive daily price
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No vehicle with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle to update")
    ),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "The updated vehicle", body = VehicleDto),
        (status = 400, description = "Non-positive daily price", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No vehicle with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let vehicle = VehicleService::new(&state.db)
        .update(vehicle_id, UpdateVehicleParams::from_dto(payload))
        .await?;

    Ok(Json(vehicle))
}

/// Remove a vehicle from the fleet.
///
/// Refused while any active booking references the vehicle.
///
/// # Access Control
/// - `Admin` - Only admins can remove vehicles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `vehicle_id` - Vehicle to remove
///
/// # Returns
/// - `200 OK` - Vehicle removed
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No vehicle with that id
/// - `409 Conflict` - Vehicle still has an active booking
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle to remove")
    ),
    responses(
        (status = 200, description = "Vehicle removed", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No vehicle with that id", body = ErrorDto),
        (status = 409, description = "Vehicle still has an active booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    VehicleService::new(&state.db).delete(vehicle_id).await?;

    Ok(Json(MessageDto {
        message: "Vehicle deleted successfully".to_string(),
    }))
}
