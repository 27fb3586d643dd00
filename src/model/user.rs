//! User DTOs and parameter models.

use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a user; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[schema(value_type = String, example = "customer")]
    pub role: UserRole,
}

impl UserDto {
    /// Converts an entity model to the public DTO, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            role: entity.role,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// Defaults to `customer` when omitted.
    #[schema(value_type = Option<String>, example = "customer")]
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Only admins may change roles; customers updating themselves must omit it.
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
}

/// Parameters for inserting a user row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
}

/// Parameters for a partial user update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email.map(|e| e.trim().to_lowercase()),
            phone: dto.phone,
            role: dto.role,
        }
    }
}
