use super::*;
use sea_orm::EntityTrait;

/// Tests changing the status of a booking.
///
/// Expected: Ok with the new status stored as text
#[tokio::test]
async fn stores_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    repo.update_status(booking.id, BookingStatus::Approved)
        .await?;

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "APPROVED");

    Ok(())
}

/// Tests changing the status of a booking that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo.update_status(999, BookingStatus::Rejected).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
