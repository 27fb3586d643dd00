use crate::{
    error::{auth::AuthError, AppError},
    model::user::{LoginDto, RegisterUserDto},
    service::auth::AuthService,
};
use entity::user::UserRole;
use test_utils::builder::TestBuilder;

mod login;
mod register;

fn register_dto(email: &str) -> RegisterUserDto {
    RegisterUserDto {
        name: "Alice".to_string(),
        email: email.to_string(),
        password: "hunter2!".to_string(),
        phone: "+1000001".to_string(),
        role: None,
    }
}
