use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::Actor,
    model::user::UpdateUserParams,
    service::user::UserService,
};
use entity::user::UserRole;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod update;

fn no_changes() -> UpdateUserParams {
    UpdateUserParams {
        name: None,
        email: None,
        phone: None,
        role: None,
    }
}
