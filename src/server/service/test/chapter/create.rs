use super::*;

/// Tests creating consecutive chapters.
///
/// Expected: chapters numbered 1 then 2
#[tokio::test]
async fn numbers_chapters_sequentially() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;

    let service = ChapterService::new(db);
    let first = service.create(create_param(fan_fiction.id, "Prologue")).await?;
    let second = service.create(create_param(fan_fiction.id, "Departure")).await?;

    assert_eq!(first.chapter_number, 1);
    assert_eq!(second.chapter_number, 2);

    Ok(())
}

/// Tests that numbering continues after the highest existing chapter.
///
/// Expected: new chapter numbered one past the maximum
#[tokio::test]
async fn continues_after_highest_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;
    factory::create_chapter(db, fan_fiction.id, 4).await?;

    let chapter = ChapterService::new(db)
        .create(create_param(fan_fiction.id, "Epilogue"))
        .await?;

    assert_eq!(chapter.chapter_number, 5);

    Ok(())
}
