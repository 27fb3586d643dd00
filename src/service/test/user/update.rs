use super::*;

/// Tests a customer updating their own profile.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn customer_updates_self() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();
    let actor = Actor {
        id: customer.id,
        role: UserRole::Customer,
    };

    let updated = UserService::new(db)
        .update(
            &actor,
            customer.id,
            UpdateUserParams {
                name: Some("New Name".to_string()),
                ..no_changes()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "New Name");
}

/// Tests a customer updating another user.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn customer_cannot_update_others() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();
    let other = factory::user::create_customer(db).await.unwrap();
    let actor = Actor {
        id: customer.id,
        role: UserRole::Customer,
    };

    let result = UserService::new(db)
        .update(
            &actor,
            other.id,
            UpdateUserParams {
                name: Some("Hijacked".to_string()),
                ..no_changes()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));
}

/// Tests a customer trying to change their own role.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn customer_cannot_change_role() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_customer(db).await.unwrap();
    let actor = Actor {
        id: customer.id,
        role: UserRole::Customer,
    };

    let result = UserService::new(db)
        .update(
            &actor,
            customer.id,
            UpdateUserParams {
                role: Some(UserRole::Admin),
                ..no_changes()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));
}

/// Tests an admin changing another user's role.
///
/// Expected: Ok with the role changed
#[tokio::test]
async fn admin_changes_role() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    let customer = factory::user::create_customer(db).await.unwrap();
    let actor = Actor {
        id: admin.id,
        role: UserRole::Admin,
    };

    let updated = UserService::new(db)
        .update(
            &actor,
            customer.id,
            UpdateUserParams {
                role: Some(UserRole::Admin),
                ..no_changes()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.role, UserRole::Admin);
}

/// Tests updating a user onto an email someone else already holds.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_taken_email() {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    let taken = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await
        .unwrap();
    let customer = factory::user::create_customer(db).await.unwrap();
    let actor = Actor {
        id: admin.id,
        role: UserRole::Admin,
    };

    let result = UserService::new(db)
        .update(
            &actor,
            customer.id,
            UpdateUserParams {
                email: Some(taken.email.clone()),
                ..no_changes()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}
