use super::*;

/// Tests that deleting a chapter removes its comments only.
///
/// Expected: Ok(true), the fan-fiction comment survives
#[tokio::test]
async fn deletes_chapter_comments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;
    let chapter = factory::create_chapter(db, fan_fiction.id, 1).await?;
    factory::create_comment(db, author.id, "chapter", chapter.id).await?;
    factory::create_comment(db, author.id, "fanfiction", fan_fiction.id).await?;

    let deleted = ChapterService::new(db).delete(chapter.id).await?;

    assert!(deleted);
    assert_eq!(Comment::find().count(db).await?, 1);

    Ok(())
}
