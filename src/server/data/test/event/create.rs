use super::*;

/// Tests creating an event with tags.
///
/// Verifies that the tag associations are written and returned nested in the
/// event, sorted by tag name.
///
/// Expected: Ok(Event) with both tags
#[tokio::test]
async fn creates_event_with_tags() -> Result<(), DbErr> {
    let test = event_test().await;
    let db = test.db.as_ref().unwrap();

    let shonen = factory::tag::create_tag_named(db, "Shonen").await?;
    let comedy = factory::tag::create_tag_named(db, "Comedy").await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(create_param("Watch party", vec![shonen.id, comedy.id]))
        .await?;

    let names: Vec<&str> = event.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Comedy", "Shonen"]);

    let found = repo.find_by_id(event.id).await?.unwrap();
    assert_eq!(found.tags.len(), 2);

    Ok(())
}

/// Tests listing events.
///
/// Verifies that the list is ordered by date with the latest first and every
/// event carries its own tags only.
///
/// Expected: Ok ordered by date descending
#[tokio::test]
async fn lists_latest_first() -> Result<(), DbErr> {
    let test = event_test().await;
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let repo = EventRepository::new(db);
    let mut early = create_param("Early", vec![tag.id]);
    early.date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    repo.create(early).await?;
    repo.create(create_param("Late", vec![])).await?;

    let events = repo.get_all().await?;

    assert_eq!(events[0].title, "Late");
    assert!(events[0].tags.is_empty());
    assert_eq!(events[1].title, "Early");
    assert_eq!(events[1].tags.len(), 1);

    Ok(())
}
