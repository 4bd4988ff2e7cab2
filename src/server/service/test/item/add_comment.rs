use super::*;

fn comment(author_id: i32, item_id: i32, text: &str) -> CreateCommentParams {
    CreateCommentParams {
        author_id,
        item_id,
        text: Some(text.to_string()),
    }
}

/// Tests commenting after a finished approved booking.
///
/// Expected: Ok with the comment, then visible on the item
#[tokio::test]
async fn comments_after_finished_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .past()
        .build()
        .await?;

    let service = ItemService::new(db);
    let created = service
        .add_comment(comment(booker.id, item.id, "Great drill"))
        .await?;

    assert_eq!(created.text, "Great drill");
    assert_eq!(created.author_name, booker.name);

    let item = service.get(booker.id, item.id).await?;
    assert_eq!(item.comments.len(), 1);

    Ok(())
}

/// Tests commenting without a finished approved booking.
///
/// Verifies that a waiting booking and an ongoing approved booking do not
/// allow commenting.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_without_finished_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, item, _) = factory::helpers::create_booking_with_dependencies(db).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .current()
        .build()
        .await?;

    let service = ItemService::new(db);
    let result = service
        .add_comment(comment(booker.id, item.id, "Too early"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests blank text and a missing item.
///
/// Expected: Err(Validation) and Err(NotFound)
#[tokio::test]
async fn rejects_blank_text_and_missing_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, item, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = ItemService::new(db);

    assert!(matches!(
        service.add_comment(comment(booker.id, item.id, "")).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.add_comment(comment(booker.id, 999, "Hello")).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
