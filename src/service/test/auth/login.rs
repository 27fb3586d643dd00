use super::*;

/// Tests logging in with valid credentials.
///
/// Expected: Ok with the registered user's row
#[tokio::test]
async fn accepts_valid_credentials() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service.register(register_dto("alice@example.com")).await.unwrap();

    let user = service
        .login(LoginDto {
            email: "alice@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, registered.id);
}

/// Tests that login is case-insensitive on the email.
///
/// Expected: Ok
#[tokio::test]
async fn normalizes_email_case() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(register_dto("alice@example.com")).await.unwrap();

    let result = service
        .login(LoginDto {
            email: "Alice@Example.COM".to_string(),
            password: "hunter2!".to_string(),
        })
        .await;

    assert!(result.is_ok());
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(register_dto("alice@example.com")).await.unwrap();

    let result = service
        .login(LoginDto {
            email: "alice@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}

/// Tests logging in with an email no account has.
///
/// Expected: Err(InvalidCredentials), indistinguishable from a wrong password
#[tokio::test]
async fn rejects_unknown_email() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login(LoginDto {
            email: "nobody@example.com".to_string(),
            password: "hunter2!".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}
