use super::*;

/// Tests deleting a fan-fiction that has chapters and comments.
///
/// Expected: Ok(true), chapters and all attached comments removed, other comments kept
#[tokio::test]
async fn cascades_to_chapters_and_comments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .with_table(BlogPost)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;
    let chapter = factory::create_chapter(db, fan_fiction.id, 1).await?;
    let post = factory::create_blog_post(db, author.id).await?;
    factory::create_comment(db, author.id, "fanfiction", fan_fiction.id).await?;
    factory::create_comment(db, author.id, "chapter", chapter.id).await?;
    factory::create_comment(db, author.id, "blog", post.id).await?;

    let deleted = FanFictionService::new(db).delete(fan_fiction.id).await?;

    assert!(deleted);
    assert_eq!(Chapter::find().count(db).await?, 0);
    assert_eq!(Comment::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a fan-fiction that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = FanFictionService::new(db).delete(5).await?;

    assert!(!deleted);

    Ok(())
}
