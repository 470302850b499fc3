use super::*;

/// Tests listing only active announcements.
///
/// Expected: Ok with the inactive announcement left out
#[tokio::test]
async fn hides_inactive_when_active_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AnnouncementFactory::new(db).title("visible").build().await?;
    AnnouncementFactory::new(db)
        .title("hidden")
        .active(false)
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);

    let active = repo.get_all(true).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "visible");

    let all = repo.get_all(false).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests announcement ordering.
///
/// Verifies that higher priorities come first regardless of insertion order.
///
/// Expected: Ok ordered by priority descending
#[tokio::test]
async fn orders_by_priority_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AnnouncementFactory::new(db).title("low").priority(1).build().await?;
    AnnouncementFactory::new(db).title("high").priority(9).build().await?;
    AnnouncementFactory::new(db).title("mid").priority(5).build().await?;

    let repo = AnnouncementRepository::new(db);
    let titles: Vec<String> = repo
        .get_all(false)
        .await?
        .into_iter()
        .map(|a| a.title)
        .collect();

    assert_eq!(titles, vec!["high", "mid", "low"]);

    Ok(())
}
