use super::*;

/// Tests resolving tag ids.
///
/// Verifies that known ids are returned sorted by name and unknown ids are
/// silently skipped, so callers can compare lengths to detect bad input.
///
/// Expected: Ok with the two existing tags
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let zombie = factory::tag::create_tag_named(db, "Zombie").await?;
    let action = factory::tag::create_tag_named(db, "Action").await?;

    let repo = TagRepository::new(db);
    let tags = repo.find_by_ids(&[zombie.id, action.id, 9999]).await?;

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Action", "Zombie"]);

    Ok(())
}

/// Tests resolving an empty id list.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db).await?;

    let repo = TagRepository::new(db);

    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
