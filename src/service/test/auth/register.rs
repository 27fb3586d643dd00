use super::*;

/// Tests registering an account with defaults.
///
/// Expected: Ok with a customer role and the email lowercased
#[tokio::test]
async fn registers_customer_by_default() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(register_dto("Alice@Example.COM"))
        .await
        .unwrap();

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::Customer);
}

/// Tests that the stored hash is not the clear-text password.
///
/// Expected: Ok with a bcrypt hash in the database
#[tokio::test]
async fn stores_hashed_password() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(register_dto("alice@example.com"))
        .await
        .unwrap();

    let stored = crate::data::user::UserRepository::new(db)
        .find_by_id(user.id)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(stored.password_hash, "hunter2!");
    assert!(stored.password_hash.starts_with("$2"));
}

/// Tests registering an admin when the role is given.
///
/// Expected: Ok with an admin role
#[tokio::test]
async fn honors_requested_role() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(RegisterUserDto {
            role: Some(UserRole::Admin),
            ..register_dto("admin@example.com")
        })
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Admin);
}

/// Tests that a reused email is rejected, case-insensitively.
///
/// Expected: Err(Conflict) on the second registration
#[tokio::test]
async fn rejects_duplicate_email() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(register_dto("alice@example.com")).await.unwrap();

    let result = service.register(register_dto("ALICE@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

/// Tests registering with an empty password.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_password() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .register(RegisterUserDto {
            password: String::new(),
            ..register_dto("alice@example.com")
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
