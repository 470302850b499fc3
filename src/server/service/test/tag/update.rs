use super::*;

/// Tests renaming a tag without touching its slug.
///
/// Expected: Ok(Some(Tag)) with the new name and the old slug
#[tokio::test]
async fn keeps_slug_when_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag_named(db, "Horror").await?;

    let updated = TagService::new(db)
        .update(UpdateTagParam {
            id: tag.id,
            name: Some("Psychological Horror".to_string()),
            slug: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Psychological Horror");
    assert_eq!(updated.slug, "horror");

    Ok(())
}

/// Tests renaming a tag with a blank slug.
///
/// Expected: Ok(Some(Tag)) with the slug derived from the new name
#[tokio::test]
async fn derives_slug_when_blank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag_named(db, "Horror").await?;

    let updated = TagService::new(db)
        .update(UpdateTagParam {
            id: tag.id,
            name: Some("Psychological Horror".to_string()),
            slug: Some(String::new()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.slug, "psychological-horror");

    Ok(())
}

/// Tests that a tag may keep its own name on update.
///
/// Expected: Ok(Some(Tag)), the tag itself does not count as a duplicate
#[tokio::test]
async fn allows_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag_named(db, "Drama").await?;

    let updated = TagService::new(db)
        .update(UpdateTagParam {
            id: tag.id,
            name: Some("Drama".to_string()),
            slug: Some("drama".to_string()),
        })
        .await?;

    assert!(updated.is_some());

    Ok(())
}

/// Tests updating a tag that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = TagService::new(db)
        .update(UpdateTagParam {
            id: 404,
            name: Some("Ghost".to_string()),
            slug: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
