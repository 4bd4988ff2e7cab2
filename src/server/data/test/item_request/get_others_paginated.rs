use super::*;

/// Tests listing requests of other users.
///
/// Expected: Ok without the caller's own request
#[tokio::test]
async fn excludes_own_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::item_request::create_item_request(db, caller.id).await?;
    let foreign = factory::item_request::create_item_request(db, other.id).await?;

    let repo = ItemRequestRepository::new(db);
    let result = repo.get_others_paginated(caller.id, 0, 10).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, foreign.id);

    Ok(())
}

/// Tests paging through other users' requests.
///
/// Expected: Ok with the newest request on the first page
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_item_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let older = ItemRequestFactory::new(db, other.id)
        .created(now() - Duration::days(1))
        .build()
        .await?;
    let newer = ItemRequestFactory::new(db, other.id).build().await?;

    let repo = ItemRequestRepository::new(db);
    let first = repo.get_others_paginated(caller.id, 0, 1).await?;
    let second = repo.get_others_paginated(caller.id, 1, 1).await?;

    assert_eq!(first[0].id, newer.id);
    assert_eq!(second[0].id, older.id);

    Ok(())
}
