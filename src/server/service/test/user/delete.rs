use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok, and the user can no longer be fetched
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    service.delete(user.id).await?;

    assert!(matches!(
        service.get(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
