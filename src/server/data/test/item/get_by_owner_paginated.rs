use super::*;

/// Tests that only the owner's items are returned, in id order.
///
/// Expected: Ok with the owner's two items
#[tokio::test]
async fn returns_only_owner_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let first = factory::item::create_item(db, owner.id).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    factory::item::create_item(db, other.id).await?;

    let repo = ItemRepository::new(db);
    let result = repo.get_by_owner_paginated(owner.id, 0, 10).await?;

    assert_eq!(
        result.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::helpers::create_item_with_owner(db).await?;

    let repo = ItemRepository::new(db);
    let result = repo.get_by_owner_paginated(owner.id, 5, 10).await?;

    assert!(result.is_empty());

    Ok(())
}
