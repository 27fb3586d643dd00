use super::*;

/// Tests creating a user with all fields set.
///
/// Expected: Ok with the user persisted and timestamps populated
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone: "+1000001".to_string(),
            role: UserRole::Customer,
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::Customer);
    assert_eq!(user.created_at, user.updated_at);

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique index.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = CreateUserParams {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "hash".to_string(),
        phone: "+1000001".to_string(),
        role: UserRole::Customer,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
