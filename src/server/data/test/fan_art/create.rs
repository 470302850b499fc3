use super::*;

/// Tests creating fan art credited to a registered artist.
///
/// Verifies that the artist's username is joined into the returned model.
///
/// Expected: Ok(FanArt) with artist_username set
#[tokio::test]
async fn joins_registered_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::FanArt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_user(db).await?;

    let repo = FanArtRepository::new(db);
    let art = repo.create(create_param(Some(artist.id), "")).await?;

    assert_eq!(art.artist_id, Some(artist.id));
    assert_eq!(art.artist_username, Some(artist.username));

    Ok(())
}

/// Tests creating fan art with only a free-form credit.
///
/// Expected: Ok(FanArt) with no artist_username
#[tokio::test]
async fn keeps_free_form_credit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::FanArt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FanArtRepository::new(db);
    repo.create(create_param(None, "Guest Artist")).await?;

    let all = repo.get_all().await?;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].artist_name, "Guest Artist");
    assert_eq!(all[0].artist_username, None);

    Ok(())
}
