use super::*;

/// Tests clearing the front page link and changing status.
///
/// Expected: Ok(Some(FanFiction)) with no link and completed status
#[tokio::test]
async fn clears_front_page_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, story) = factory::helpers::create_fan_fiction_with_author(db).await?;

    let repo = FanFictionRepository::new(db);
    let updated = repo
        .update(UpdateFanFictionParam {
            id: story.id,
            title: None,
            summary: None,
            status: Some(FanFictionStatus::Completed),
            front_page_url: Some(None),
            tag_ids: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.front_page_url, None);
    assert_eq!(updated.status, FanFictionStatus::Completed);
    assert_eq!(updated.title, story.title);

    Ok(())
}

/// Tests replacing the tag set of a story.
///
/// Expected: Ok(Some(FanFiction)) with only the new tag
#[tokio::test]
async fn replaces_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let old = factory::create_tag(db).await?;
    let new = factory::create_tag(db).await?;
    let story = FanFictionFactory::new(db, author.id)
        .tags(vec![old.id])
        .build()
        .await?;

    let repo = FanFictionRepository::new(db);
    let updated = repo
        .update(UpdateFanFictionParam {
            id: story.id,
            title: None,
            summary: None,
            status: None,
            front_page_url: None,
            tag_ids: Some(vec![new.id]),
        })
        .await?
        .unwrap();

    let ids: Vec<i32> = updated.tags.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![new.id]);

    Ok(())
}
