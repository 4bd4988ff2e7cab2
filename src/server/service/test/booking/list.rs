use super::*;

/// Tests an unknown state name.
///
/// Expected: Err(UnsupportedState) with message `Unknown state: <value>`
#[tokio::test]
async fn rejects_unknown_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service.get_by_booker(user.id, "UNKNOWN", first_page()).await;

    match result {
        Err(err @ AppError::UnsupportedState(_)) => {
            assert_eq!(err.to_string(), "Unknown state: UNKNOWN");
        }
        other => panic!("expected UnsupportedState, got {:?}", other.map(|b| b.len())),
    }

    let result = service.get_by_owner(user.id, "later", first_page()).await;
    assert!(matches!(result, Err(AppError::UnsupportedState(_))));

    Ok(())
}

/// Tests listing by booker and by owner with a state filter.
///
/// Expected: booker sees own waiting booking; owner sees the past booking of their item
#[tokio::test]
async fn lists_by_booker_and_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item, waiting) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let past = BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .past()
        .build()
        .await?;

    let service = BookingService::new(db);

    let by_booker = service
        .get_by_booker(booker.id, "WAITING", first_page())
        .await?;
    assert_eq!(by_booker.len(), 1);
    assert_eq!(by_booker[0].id, waiting.id);

    let by_owner = service.get_by_owner(owner.id, "PAST", first_page()).await?;
    assert_eq!(by_owner.len(), 1);
    assert_eq!(by_owner[0].id, past.id);

    let all = service.get_by_owner(owner.id, "ALL", first_page()).await?;
    assert_eq!(
        all.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![waiting.id, past.id]
    );

    Ok(())
}

/// Tests listing for a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BookingService::new(db);
    let result = service.get_by_booker(999, "ALL", first_page()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
