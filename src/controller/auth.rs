use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, SESSION_AUTH_USER_ID},
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, RegisterUserDto, UserDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the given profile and credentials. The email is
/// normalized to lowercase and must be unique. When `role` is omitted the
/// account is a customer.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (name, email, password, phone, role)
///
/// # Returns
/// - `201 Created` - Successfully registered
/// - `400 Bad Request` - Empty email or password
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserDto),
        (status = 400, description = "Empty email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password.
///
/// Verifies the credentials and establishes a session. Unknown emails and
/// wrong passwords are indistinguishable to the caller.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to establish on success
/// - `payload` - Login credentials (email, password)
///
/// # Returns
/// - `200 OK` - Logged in; session cookie set
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).login(payload).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok(Json(UserDto::from_entity(user)))
}

/// Log out the current session.
///
/// Destroys the session server-side. Safe to call without a session.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `session` - Session to destroy
///
/// # Returns
/// - `200 OK` - Session destroyed
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session destroyed", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(Json(MessageDto {
        message: "Logged out".to_string(),
    }))
}

/// Get the authenticated user's own profile.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok(Json(UserDto::from_entity(user)))
}
