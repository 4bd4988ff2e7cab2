use super::*;

/// Tests grouping comments by item.
///
/// Expected: Ok with each item mapped to its own comments
#[tokio::test]
async fn groups_comments_by_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first_item) = factory::helpers::create_item_with_owner(db).await?;
    let second_item = factory::item::create_item(db, owner.id).await?;
    let author = factory::user::create_user(db).await?;

    let c1 = factory::comment::create_comment(db, first_item.id, author.id).await?;
    let c2 = factory::comment::create_comment(db, first_item.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .get_by_item_ids(&[first_item.id, second_item.id])
        .await?;

    let comments = result.get(&first_item.id).unwrap();
    assert_eq!(
        comments.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![c1.id, c2.id]
    );
    assert!(comments.iter().all(|c| c.author_name == author.name));
    assert!(!result.contains_key(&second_item.id));

    Ok(())
}
