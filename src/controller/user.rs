use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{Actor, AuthGuard},
    model::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UpdateUserParams, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - All users
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(users))
}

/// Update a user's profile.
///
/// Admins may update anyone, including roles. Customers may update only
/// their own profile and must omit `role`.
///
/// # Access Control
/// - `Admin` - Any user, any field
/// - `Customer` - Self only, no role changes
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `user_id` - User to update
/// - `payload` - Fields to change; omitted fields are untouched
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Customer editing someone else or their role
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - New email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User to update")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Customer editing someone else or their role", body = ErrorDto),
        (status = 404, description = "No user with that id", body = ErrorDto),
        (status = 409, description = "New email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;
    let actor = Actor::from_user(&caller);

    let user = UserService::new(&state.db)
        .update(&actor, user_id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok(Json(user))
}

/// Delete a user.
///
/// Refused while the user holds any active booking.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `user_id` - User to delete
///
/// # Returns
/// - `200 OK` - User deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - User still holds an active booking
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User to delete")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No user with that id", body = ErrorDto),
        (status = 409, description = "User still holds an active booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    UserService::new(&state.db).delete(user_id).await?;

    Ok(Json(MessageDto {
        message: "User deleted successfully".to_string(),
    }))
}
