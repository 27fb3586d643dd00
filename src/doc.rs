//! OpenAPI document assembled from the controller path annotations.

use utoipa::OpenApi;

use crate::{
    controller::{auth, booking, user, vehicle},
    model,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        user::get_all_users,
        user::update_user,
        user::delete_user,
        vehicle::create_vehicle,
        vehicle::get_all_vehicles,
        vehicle::get_vehicle,
        vehicle::update_vehicle,
        vehicle::delete_vehicle,
        booking::create_booking,
        booking::get_bookings,
        booking::get_booking,
        booking::update_booking,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::user::UserDto,
        model::user::RegisterUserDto,
        model::user::LoginDto,
        model::user::UpdateUserDto,
        model::vehicle::VehicleDto,
        model::vehicle::CreateVehicleDto,
        model::vehicle::UpdateVehicleDto,
        model::booking::CreateBookingDto,
        model::booking::UpdateBookingStatusDto,
        model::booking::CreatedBookingDto,
        model::booking::BookedVehicleDto,
        model::booking::BookingDetailDto,
        model::booking::CustomerSummaryDto,
        model::booking::VehicleSummaryDto,
        model::booking::UpdatedBookingDto,
        model::booking::VehicleAvailabilityDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Registration, login, and session management"),
        (name = user::USER_TAG, description = "User administration"),
        (name = vehicle::VEHICLE_TAG, description = "Fleet management"),
        (name = booking::BOOKING_TAG, description = "Booking lifecycle"),
    )
)]
pub struct ApiDoc;
