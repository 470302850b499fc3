use super::*;

fn create_param(author_id: i32, tag_ids: Vec<i32>) -> CreateFanFictionParam {
    CreateFanFictionParam {
        author_id,
        title: "The Wandering Inn".to_string(),
        summary: "An innkeeper in another world.".to_string(),
        status: FanFictionStatus::Ongoing,
        front_page_url: None,
        tag_ids,
    }
}

/// Tests creating a fan-fiction with tags.
///
/// Expected: Ok(FanFiction) exposing the tags
#[tokio::test]
async fn creates_with_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let tag = factory::tag::create_tag_named(db, "Isekai").await?;

    let fan_fiction = FanFictionService::new(db)
        .create(create_param(author.id, vec![tag.id]))
        .await?;

    assert_eq!(fan_fiction.tags.len(), 1);
    assert_eq!(fan_fiction.tags[0].slug, "isekai");
    assert_eq!(fan_fiction.author_id, author.id);

    Ok(())
}

/// Tests creating a fan-fiction with an unknown tag.
///
/// Expected: Err(AppError::Validation) and nothing stored
#[tokio::test]
async fn rejects_unknown_tag_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let result = FanFictionService::new(db)
        .create(create_param(author.id, vec![31]))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(FanFiction::find().count(db).await?, 0);

    Ok(())
}
