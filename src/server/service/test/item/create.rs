use super::*;

fn params(owner_id: i32) -> CreateItemParams {
    CreateItemParams {
        owner_id,
        name: Some("Drill".to_string()),
        description: Some("Cordless".to_string()),
        available: Some(true),
        request_id: None,
    }
}

/// Tests listing an item.
///
/// Expected: Ok with no bookings or comments attached
#[tokio::test]
async fn creates_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let service = ItemService::new(db);
    let item = service.create(params(owner.id)).await?;

    assert_eq!(item.name, "Drill");
    assert_eq!(item.owner_id, owner.id);
    assert!(item.available);
    assert!(item.comments.is_empty());
    assert!(item.last_booking.is_none());

    Ok(())
}

/// Tests linking an item to an existing request.
///
/// Expected: Ok with request_id set
#[tokio::test]
async fn links_item_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requestor = factory::user::create_user(db).await?;
    let owner = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requestor.id).await?;

    let service = ItemService::new(db);
    let item = service
        .create(CreateItemParams {
            request_id: Some(request.id),
            ..params(owner.id)
        })
        .await?;

    assert_eq!(item.request_id, Some(request.id));

    Ok(())
}

/// Tests referencing a request that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let service = ItemService::new(db);
    let result = service
        .create(CreateItemParams {
            request_id: Some(999),
            ..params(owner.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests missing availability and unknown owner.
///
/// Expected: Err(Validation) and Err(NotFound)
#[tokio::test]
async fn rejects_invalid_input_and_unknown_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let service = ItemService::new(db);

    let result = service
        .create(CreateItemParams {
            available: None,
            ..params(owner.id)
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let result = service.create(params(999)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
