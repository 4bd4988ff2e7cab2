use super::*;

/// Creates one past, one current and one future booking of the same item.
///
/// Returns the ids as (past, current, future).
async fn create_timeline(
    db: &sea_orm::DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<(i32, i32, i32), DbErr> {
    let past = BookingFactory::new(db, item_id, booker_id)
        .status("APPROVED")
        .past()
        .build()
        .await?;
    let current = BookingFactory::new(db, item_id, booker_id)
        .status("APPROVED")
        .current()
        .build()
        .await?;
    let future = BookingFactory::new(db, item_id, booker_id)
        .status("REJECTED")
        .build()
        .await?;

    Ok((past.id, current.id, future.id))
}

/// Tests listing all bookings of a booker.
///
/// Verifies that bookings are ordered by start descending.
///
/// Expected: Ok with future, current, past
#[tokio::test]
async fn lists_all_by_start_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let (past, current, future) = create_timeline(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .get_by_booker(booker.id, BookingState::All, now(), 0, 10)
        .await?;

    assert_eq!(
        result.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![future, current, past]
    );

    Ok(())
}

/// Tests the time-based state filters.
///
/// Expected: each state returns exactly its booking
#[tokio::test]
async fn filters_by_time_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let (past, current, future) = create_timeline(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);
    let now = now();

    let ids = |bookings: Vec<crate::server::model::booking::Booking>| {
        bookings.into_iter().map(|b| b.id).collect::<Vec<_>>()
    };

    assert_eq!(
        ids(repo.get_by_booker(booker.id, BookingState::Past, now, 0, 10).await?),
        vec![past]
    );
    assert_eq!(
        ids(repo.get_by_booker(booker.id, BookingState::Current, now, 0, 10).await?),
        vec![current]
    );
    assert_eq!(
        ids(repo.get_by_booker(booker.id, BookingState::Future, now, 0, 10).await?),
        vec![future]
    );

    Ok(())
}

/// Tests the status-based state filters.
///
/// Expected: WAITING and REJECTED return only bookings with that status
#[tokio::test]
async fn filters_by_status_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .status("REJECTED")
        .period(now() + Duration::days(5), now() + Duration::days(6))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let result = repo
        .get_by_booker(booker.id, BookingState::Waiting, now(), 0, 10)
        .await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, waiting.id);

    let result = repo
        .get_by_booker(booker.id, BookingState::Rejected, now(), 0, 10)
        .await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, rejected.id);
    assert_eq!(result[0].status, BookingStatus::Rejected);

    Ok(())
}

/// Tests that other users' bookings are excluded.
///
/// Expected: Ok with an empty list for a user who booked nothing
#[tokio::test]
async fn excludes_other_bookers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .get_by_booker(owner.id, BookingState::All, now(), 0, 10)
        .await?;

    assert!(result.is_empty());

    Ok(())
}
