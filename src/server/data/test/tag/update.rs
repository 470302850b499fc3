use super::*;

/// Tests overwriting a tag's name and slug.
///
/// Expected: Ok(Some(Tag)) with the new values
#[tokio::test]
async fn overwrites_name_and_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::create_tag_named(db, "Isekai").await?;

    let repo = TagRepository::new(db);
    let updated = repo
        .update(
            tag.id,
            TagRecord {
                name: "Isekai Adventure".to_string(),
                slug: "isekai-adventure".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Isekai Adventure");
    assert_eq!(updated.slug, "isekai-adventure");

    Ok(())
}

/// Tests updating a tag that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let result = repo
        .update(
            42,
            TagRecord {
                name: "Ghost".to_string(),
                slug: "ghost".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
