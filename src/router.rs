use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::{
        auth::{login, logout, me, register},
        booking::{create_booking, get_booking, get_bookings, update_booking},
        user::{delete_user, get_all_users, update_user},
        vehicle::{create_vehicle, delete_vehicle, get_all_vehicles, get_vehicle, update_vehicle},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/users", get(get_all_users))
        .route(
            "/api/v1/users/{user_id}",
            put(update_user).delete(delete_user),
        )
        .route("/api/v1/vehicles", post(create_vehicle).get(get_all_vehicles))
        .route(
            "/api/v1/vehicles/{vehicle_id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/v1/bookings", post(create_booking).get(get_bookings))
        .route(
            "/api/v1/bookings/{booking_id}",
            get(get_booking).put(update_booking),
        )
}
