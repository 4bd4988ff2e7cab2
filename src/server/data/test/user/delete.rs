use super::*;

/// Tests deleting a user together with their items.
///
/// Verifies that the foreign key cascade removes items owned by the user.
///
/// Expected: Ok(true) and no items left
#[tokio::test]
async fn deletes_user_and_cascades_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(owner.id).await?;

    assert!(deleted);
    assert!(entity::prelude::User::find_by_id(owner.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Item::find_by_id(item.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
