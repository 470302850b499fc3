use super::*;

/// Tests creating a tag without a slug.
///
/// Expected: Ok(Tag) with the slug derived from the name
#[tokio::test]
async fn derives_slug_from_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = TagService::new(db)
        .create(create_param("Slice of Life!", None))
        .await?;

    assert_eq!(tag.slug, "slice-of-life");

    Ok(())
}

/// Tests creating a tag with an explicit slug.
///
/// Expected: Ok(Tag) keeping the given slug
#[tokio::test]
async fn keeps_explicit_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = TagService::new(db)
        .create(create_param("Mecha", Some("giant-robots")))
        .await?;

    assert_eq!(tag.slug, "giant-robots");

    Ok(())
}

/// Tests creating a tag whose name and slug are already used.
///
/// Expected: Err(AppError::Validation) on both `name` and `slug`
#[tokio::test]
async fn rejects_duplicate_name_and_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tag::create_tag_named(db, "Romance").await?;

    let result = TagService::new(db)
        .create(create_param("Romance", None))
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.contains("name"));
            assert!(errors.contains("slug"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests creating a tag whose name yields no slug characters.
///
/// Expected: Err(AppError::Validation) on `slug`
#[tokio::test]
async fn rejects_name_without_slug_characters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TagService::new(db).create(create_param("!!!", None)).await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains("slug")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
