use super::*;

/// Tests picking the last and next approved bookings around now.
///
/// Verifies that the latest started booking is the last one, the earliest
/// unstarted booking is the next one, and non-approved bookings are ignored.
///
/// Expected: Ok with last = current booking, next = nearest future booking
#[tokio::test]
async fn picks_bookings_around_now() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    let now = now();

    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .period(now - Duration::days(10), now - Duration::days(9))
        .build()
        .await?;
    let current = BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .current()
        .build()
        .await?;
    let near = BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .period(now + Duration::days(2), now + Duration::days(3))
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .period(now + Duration::days(5), now + Duration::days(6))
        .build()
        .await?;
    // Earlier than `near` but still waiting
    BookingFactory::new(db, item.id, booker.id)
        .period(now + Duration::days(1), now + Duration::days(2))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.get_last_and_next(&[item.id], now).await?;

    let entry = result.get(&item.id).unwrap();
    assert_eq!(entry.last.as_ref().map(|b| b.id), Some(current.id));
    assert_eq!(entry.next.as_ref().map(|b| b.id), Some(near.id));

    Ok(())
}

/// Tests an item without approved bookings.
///
/// Expected: Ok with no entry for the item
#[tokio::test]
async fn omits_items_without_approved_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, item, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo.get_last_and_next(&[item.id], now()).await?;

    assert!(!result.contains_key(&item.id));

    Ok(())
}
