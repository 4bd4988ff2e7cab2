use super::*;

fn params(booker_id: i32, item_id: i32, start: NaiveDateTime, end: NaiveDateTime) -> CreateBookingParams {
    CreateBookingParams {
        booker_id,
        item_id: Some(item_id),
        start: Some(start),
        end: Some(end),
    }
}

/// Tests booking someone else's available item.
///
/// Expected: Ok with status WAITING and item/booker names
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(params(booker.id, item.id, in_days(1), in_days(2)))
        .await?;

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.item_name, item.name);
    assert_eq!(booking.booker_id, booker.id);

    Ok(())
}

/// Tests booking an unavailable item.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_unavailable_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id).available(false).build().await?;

    let service = BookingService::new(db);
    let result = service
        .create(params(booker.id, item.id, in_days(1), in_days(2)))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the owner booking their own item.
///
/// Expected: Err(NoRights)
#[tokio::test]
async fn rejects_own_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = BookingService::new(db);
    let result = service
        .create(params(owner.id, item.id, in_days(1), in_days(2)))
        .await;

    assert!(matches!(result, Err(AppError::NoRights(_))));

    Ok(())
}

/// Tests invalid booking periods.
///
/// Verifies that a start in the past, an end before the start and an end equal
/// to the start are all rejected.
///
/// Expected: Err(Validation) in every case
#[tokio::test]
async fn rejects_invalid_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let start = in_days(1);

    for (start, end) in [
        (in_days(-1), in_days(1)),
        (in_days(2), in_days(1)),
        (start, start),
    ] {
        let result = service
            .create(params(booker.id, item.id, start, end))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    Ok(())
}

/// Tests booking a missing item and booking with missing fields.
///
/// Expected: Err(NotFound) and Err(Validation)
#[tokio::test]
async fn rejects_missing_item_and_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booker = factory::user::create_user(db).await?;

    let service = BookingService::new(db);

    let result = service
        .create(params(booker.id, 999, in_days(1), in_days(2)))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .create(CreateBookingParams {
            booker_id: booker.id,
            item_id: Some(1),
            start: None,
            end: Some(in_days(2)),
        })
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
