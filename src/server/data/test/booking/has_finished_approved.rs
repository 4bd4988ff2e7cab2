use super::*;

/// Tests a booker with an approved booking that already ended.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_for_finished_approved_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .past()
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.has_finished_approved(booker.id, item.id, now()).await?;

    assert!(result);

    Ok(())
}

/// Tests bookings that do not qualify.
///
/// Verifies that an ongoing approved booking and a finished rejected booking
/// are both ignored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_ongoing_or_rejected_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .current()
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("REJECTED")
        .past()
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.has_finished_approved(booker.id, item.id, now()).await?;

    assert!(!result);

    Ok(())
}
