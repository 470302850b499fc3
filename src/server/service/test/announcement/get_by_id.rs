use super::*;

/// Tests retrieving an inactive announcement.
///
/// Expected: Ok(None) without inactive access, Ok(Some) with it
#[tokio::test]
async fn hides_inactive_unless_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::announcement::AnnouncementFactory::new(db)
        .active(false)
        .build()
        .await?;

    let service = AnnouncementService::new(db);

    assert!(service.get_by_id(announcement.id, false).await?.is_none());
    assert!(service.get_by_id(announcement.id, true).await?.is_some());

    Ok(())
}

/// Tests retrieving an active announcement without inactive access.
///
/// Expected: Ok(Some(Announcement))
#[tokio::test]
async fn shows_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let announcement = factory::create_announcement(db).await?;

    let found = AnnouncementService::new(db)
        .get_by_id(announcement.id, false)
        .await?;

    assert!(found.is_some());

    Ok(())
}
