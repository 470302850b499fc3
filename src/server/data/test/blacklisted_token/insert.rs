use super::*;

/// Tests blacklisting a refresh token id.
///
/// Verifies that the jti is reported as blacklisted afterwards while other ids
/// are not.
///
/// Expected: is_blacklisted returns true only for the inserted jti
#[tokio::test]
async fn marks_jti_as_blacklisted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = BlacklistedTokenRepository::new(db);

    repo.insert("jti-one", user.id, Utc::now() + Duration::days(7))
        .await?;

    assert!(repo.is_blacklisted("jti-one").await?);
    assert!(!repo.is_blacklisted("jti-two").await?);

    Ok(())
}

/// Tests blacklisting the same jti twice.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_jti() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = BlacklistedTokenRepository::new(db);
    let expires_at = Utc::now() + Duration::days(7);

    repo.insert("jti-one", user.id, expires_at).await?;
    let result = repo.insert("jti-one", user.id, expires_at).await;

    assert!(result.is_err());

    Ok(())
}
