use super::*;

/// Tests purging expired blacklist rows.
///
/// Verifies that rows past their expiry are removed and rows still in their
/// lifetime are kept.
///
/// Expected: Ok(1) and only the live jti remains
#[tokio::test]
async fn removes_only_expired_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = BlacklistedTokenRepository::new(db);
    let now = Utc::now();

    repo.insert("expired", user.id, now - Duration::hours(1)).await?;
    repo.insert("live", user.id, now + Duration::hours(1)).await?;

    let purged = repo.purge_expired(now).await?;

    assert_eq!(purged, 1);
    assert!(!repo.is_blacklisted("expired").await?);
    assert!(repo.is_blacklisted("live").await?);

    Ok(())
}
