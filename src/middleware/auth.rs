//! Session-backed authentication guard.
//!
//! Controllers call `AuthGuard::require()` to resolve the session into a
//! verified identity before doing anything else. The guard only establishes
//! *who* is calling; *what* they may do is decided by the policy module.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Session key under which the authenticated user's id is stored.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Verified identity of the caller, as consumed by the policy gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub role: UserRole,
}

impl Actor {
    pub fn from_user(user: &entity::user::Model) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to the authenticated user.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user's current database row
    /// - `Err(AuthError::NotAuthenticated)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Resolves the session to an authenticated admin.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated admin's current database row
    /// - `Err(AuthError::Forbidden)` - Authenticated but not an admin
    pub async fn require_admin(&self) -> Result<entity::user::Model, AppError> {
        let user = self.require().await?;

        if user.role != UserRole::Admin {
            return Err(AuthError::Forbidden(format!(
                "User {} attempted an admin-only operation",
                user.id
            ))
            .into());
        }

        Ok(user)
    }
}
