use super::*;

fn rename(caller_id: i32, item_id: i32, name: &str) -> UpdateItemParams {
    UpdateItemParams {
        caller_id,
        item_id,
        name: Some(name.to_string()),
        description: None,
        available: None,
    }
}

/// Tests a partial update by the owner.
///
/// Expected: Ok with the new name and untouched description
#[tokio::test]
async fn owner_updates_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let updated = service.update(rename(owner.id, item.id, "Hammer")).await?;

    assert_eq!(updated.name, "Hammer");
    assert_eq!(updated.description, item.description);

    Ok(())
}

/// Tests an update attempted by someone other than the owner.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = ItemService::new(db);
    let result = service.update(rename(stranger.id, item.id, "Mine")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a blank name.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let result = service.update(rename(owner.id, item.id, " ")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
