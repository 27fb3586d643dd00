use crate::{
    data::vehicle::VehicleRepository,
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams},
};
use entity::vehicle::{AvailabilityStatus, VehicleType};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod create;
mod release;
mod update;
