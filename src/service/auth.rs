//! Registration and credential verification.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, LoginDto, RegisterUserDto, UserDto},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The email is normalized to lowercase before storage and uniqueness
    /// checks; the password is bcrypt-hashed and never stored in clear.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(AppError::BadRequest)` - Empty email or password
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError> {
        let email = dto.email.trim().to_lowercase();

        if email.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        // The unique index still backstops this check against races; a
        // concurrent duplicate surfaces as a database error.
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;

        let user = repo
            .create(CreateUserParams {
                name: dto.name,
                email,
                password_hash,
                phone: dto.phone,
                role: dto.role.unwrap_or(UserRole::Customer),
            })
            .await?;

        Ok(UserDto::from_entity(user))
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot probe which accounts exist.
    ///
    /// # Returns
    /// - `Ok(Model)` - Credentials valid; caller establishes the session
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<entity::user::Model, AppError> {
        let email = dto.email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
