use super::*;

/// Tests that blank text returns nothing even when items exist.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn blank_text_returns_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let result = service.search("   ", first_page()).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests a case-insensitive search that skips unavailable items.
///
/// Expected: Ok with only the available match
#[tokio::test]
async fn finds_available_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let available = ItemFactory::new(db, owner.id)
        .name("Camping TENT")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Broken tent")
        .available(false)
        .build()
        .await?;

    let service = ItemService::new(db);
    let result = service.search("Tent", first_page()).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, available.id);

    Ok(())
}
