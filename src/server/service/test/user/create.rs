use super::*;

fn params(name: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
    }
}

/// Tests registering a user with valid data.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.create(params("Alice", "alice@example.com")).await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(service.get(user.id).await?, user);

    Ok(())
}

/// Tests registering a second user with an existing email.
///
/// Expected: Err(DuplicateEmail)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    let result = service.create(params("Bob", &existing.email)).await;

    assert!(matches!(result, Err(AppError::DuplicateEmail(_))));

    Ok(())
}

/// Tests missing, blank and malformed input.
///
/// Expected: Err(Validation) in every case
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let missing_email = CreateUserParams {
        name: Some("Alice".to_string()),
        email: None,
    };
    assert!(matches!(
        service.create(missing_email).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.create(params("  ", "alice@example.com")).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.create(params("Alice", "not-an-email")).await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}
