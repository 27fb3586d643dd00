use crate::{data::booking::BookingRepository, model::booking::NewBookingRow};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod expired;
mod insert;
