use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user and returns it with a generated id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("Alice".to_string(), "alice@example.com".to_string())
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());

    Ok(())
}

/// Tests that the unique index on email rejects a second registration.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.create("Other".to_string(), existing.email).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
