use super::*;

/// Tests the owner approving and rejecting waiting bookings.
///
/// Expected: Ok with APPROVED and REJECTED respectively
#[tokio::test]
async fn owner_approves_or_rejects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item, first) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let second = factory::booking::create_booking(db, item.id, booker.id).await?;

    let service = BookingService::new(db);

    let approved = service.approve(owner.id, first.id, true).await?;
    assert_eq!(approved.status, BookingStatus::Approved);

    let rejected = service.approve(owner.id, second.id, false).await?;
    assert_eq!(rejected.status, BookingStatus::Rejected);

    let stored = service.get(owner.id, first.id).await?;
    assert_eq!(stored.status, BookingStatus::Approved);

    Ok(())
}

/// Tests approving a booking that was already decided.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_non_waiting_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    service.approve(owner.id, booking.id, true).await?;

    let result = service.approve(owner.id, booking.id, false).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the booker trying to approve their own booking.
///
/// Expected: Err(NoRights)
#[tokio::test]
async fn rejects_booker() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    let result = service.approve(booker.id, booking.id, true).await;

    assert!(matches!(result, Err(AppError::NoRights(_))));

    Ok(())
}

/// Tests an unrelated user trying to approve a booking.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_booking_from_strangers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service.approve(stranger.id, booking.id, true).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
