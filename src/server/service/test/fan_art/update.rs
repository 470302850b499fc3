use super::*;

/// Tests clearing the only artist credit of a fan art.
///
/// Expected: Err(AppError::Validation) under `non_field_errors`
#[tokio::test]
async fn rejects_removing_last_credit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(FanArt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FanArtService::new(db);
    let fan_art = service.create(create_param(None, "Hange")).await?;

    let result = service
        .update(UpdateFanArtParam {
            artist_name: Some(String::new()),
            ..update_param(fan_art.id)
        })
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains(NON_FIELD_ERRORS)),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests swapping a free-form credit for a registered artist.
///
/// Expected: Ok(Some(FanArt)) with the artist set
#[tokio::test]
async fn replaces_name_with_artist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(FanArt)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_user(db).await?;
    let service = FanArtService::new(db);
    let fan_art = service.create(create_param(None, "Hange")).await?;

    let updated = service
        .update(UpdateFanArtParam {
            artist_name: Some(String::new()),
            artist_id: Some(Some(artist.id)),
            ..update_param(fan_art.id)
        })
        .await?
        .unwrap();

    assert_eq!(updated.artist_id, Some(artist.id));
    assert_eq!(updated.artist_name, "");

    Ok(())
}
