use super::*;

/// Tests posting a request.
///
/// Expected: Ok with no items yet
#[tokio::test]
async fn creates_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = ItemRequestService::new(db);
    let request = service
        .create(CreateItemRequestParams {
            requestor_id: user.id,
            description: Some("Need a tent".to_string()),
        })
        .await?;

    assert_eq!(request.description, "Need a tent");
    assert_eq!(request.requestor_id, user.id);
    assert!(request.items.is_empty());

    Ok(())
}

/// Tests a blank description and an unknown requestor.
///
/// Expected: Err(Validation) and Err(NotFound)
#[tokio::test]
async fn rejects_blank_description_and_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = ItemRequestService::new(db);

    let result = service
        .create(CreateItemRequestParams {
            requestor_id: user.id,
            description: Some("  ".to_string()),
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = service
        .create(CreateItemRequestParams {
            requestor_id: 999,
            description: Some("Need a tent".to_string()),
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
