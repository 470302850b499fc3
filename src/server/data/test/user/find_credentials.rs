use super::*;

/// Tests loading credentials for a known username.
///
/// Verifies that the stored password hash is returned alongside the user.
///
/// Expected: Ok(Some(UserCredentials))
#[tokio::test]
async fn returns_hash_for_known_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("haruka")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials("haruka").await?.unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests loading credentials for an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials("nobody").await?;

    assert!(credentials.is_none());

    Ok(())
}
