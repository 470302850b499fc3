use super::*;

/// Tests creating fan art credited to a registered user.
///
/// Expected: Ok(FanArt) exposing the artist's username
#[tokio::test]
async fn credits_registered_artist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(FanArt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_user(db).await?;

    let fan_art = FanArtService::new(db)
        .create(create_param(Some(artist.id), ""))
        .await?;

    assert_eq!(fan_art.artist_id, Some(artist.id));
    assert_eq!(fan_art.artist_username, Some(artist.username));

    Ok(())
}

/// Tests creating fan art credited to a user id that does not exist.
///
/// Expected: Err(AppError::Validation) on `artist`
#[tokio::test]
async fn rejects_unknown_artist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(FanArt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FanArtService::new(db).create(create_param(Some(8), "")).await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains("artist")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
