//! User management operations.

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{booking::BookingRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::Actor,
    model::user::{UpdateUserParams, UserDto},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all users.
    pub async fn get_all(&self) -> Result<Vec<UserDto>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from_entity).collect())
    }

    /// Updates a user's profile fields.
    ///
    /// Admins may update anyone and any field. Customers may update only
    /// themselves and must not touch `role`.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(AuthError::Forbidden)` - Customer editing someone else or their role
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - New email already taken
    pub async fn update(
        &self,
        actor: &Actor,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<UserDto, AppError> {
        if actor.role == UserRole::Customer {
            if actor.id != user_id {
                return Err(AuthError::Forbidden(format!(
                    "Customer {} attempted to update user {}",
                    actor.id, user_id
                ))
                .into());
            }
            if params.role.is_some() {
                return Err(AuthError::Forbidden(format!(
                    "Customer {} attempted to change their own role",
                    actor.id
                ))
                .into());
            }
        }

        let repo = UserRepository::new(self.db);

        if let Some(ref email) = params.email {
            if let Some(existing) = repo.find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(AppError::Conflict("Email already registered".to_string()));
                }
            }
        }

        let updated = repo
            .update(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserDto::from_entity(updated))
    }

    /// Deletes a user.
    ///
    /// Refused while the user holds any active booking; the check and the
    /// delete share a transaction so a booking created concurrently cannot
    /// slip between them.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::Conflict)` - User still holds an active booking
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if BookingRepository::new(&txn)
            .has_active_for_customer(user_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Cannot delete user with active bookings".to_string(),
            ));
        }

        let rows = UserRepository::new(&txn).delete(user_id).await?;
        if rows == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}
