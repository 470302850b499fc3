use super::*;

/// Tests listing the chapters of a fan-fiction.
///
/// Expected: Ok(Some(chapters)) ordered by number
#[tokio::test]
async fn orders_by_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;
    factory::create_chapter(db, fan_fiction.id, 2).await?;
    factory::create_chapter(db, fan_fiction.id, 1).await?;

    let chapters = ChapterService::new(db).list(fan_fiction.id).await?.unwrap();

    let numbers: Vec<i32> = chapters.iter().map(|c| c.chapter_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    Ok(())
}

/// Tests listing chapters of a fan-fiction that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_fan_fiction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chapters = ChapterService::new(db).list(12).await?;

    assert!(chapters.is_none());

    Ok(())
}
