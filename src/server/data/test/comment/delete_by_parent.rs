use super::*;

/// Tests deleting the comments of several parents at once.
///
/// Expected: Ok(2) and the comment on an unrelated parent survives
#[tokio::test]
async fn deletes_matching_comments_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::create_comment(db, author.id, "chapter", 1).await?;
    factory::create_comment(db, author.id, "chapter", 2).await?;
    let survivor = factory::create_comment(db, author.id, "fanfiction", 1).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.delete_by_parent("chapter", &[1, 2]).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_all(CommentFilter::default()).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests deleting with no parent ids.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_empty_parent_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::create_comment(db, author.id, "blog", 1).await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.delete_by_parent("blog", &[]).await?, 0);

    Ok(())
}
