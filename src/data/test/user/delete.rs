use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_customer(db).await?;

    let rows = UserRepository::new(db).delete(user.id).await?;

    assert_eq!(rows, 1);

    let remaining = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = UserRepository::new(db).delete(9999).await?;

    assert_eq!(rows, 0);

    Ok(())
}
