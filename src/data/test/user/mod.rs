use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use entity::user::UserRole;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
