use super::*;

/// Tests refreshing with a valid refresh token.
///
/// Expected: Ok(TokenPair) with a new refresh token
#[tokio::test]
async fn rotates_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let refresh_token = logged_in_refresh_token(db, &keys, "kaguya").await?;
    let pair = AuthService::new(db, &keys)
        .refresh(Some(&refresh_token))
        .await?;

    assert_ne!(pair.refresh.token, refresh_token);

    Ok(())
}

/// Tests presenting a refresh token a second time after rotation.
///
/// Expected: Err(AuthError::InvalidRefreshToken)
#[tokio::test]
async fn rejects_reused_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let refresh_token = logged_in_refresh_token(db, &keys, "kaguya").await?;
    let service = AuthService::new(db, &keys);
    service.refresh(Some(&refresh_token)).await?;
    let result = service.refresh(Some(&refresh_token)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken(_)))
    ));

    Ok(())
}

/// Tests refreshing without a refresh cookie.
///
/// Expected: Err(AuthError::MissingRefreshToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let result = AuthService::new(db, &keys).refresh(None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingRefreshToken))
    ));

    Ok(())
}

/// Tests using an access token where a refresh token is expected.
///
/// Expected: Err(AuthError::InvalidRefreshToken)
#[tokio::test]
async fn rejects_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let service = AuthService::new(db, &keys);
    service.register(register_param("kaguya")).await?;
    let (_, pair) = service.login(login_dto("kaguya", PASSWORD)).await?;
    let result = service.refresh(Some(&pair.access.token)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken(_)))
    ));

    Ok(())
}

/// Tests refreshing after logging out with the same token.
///
/// Expected: Err(AuthError::InvalidRefreshToken)
#[tokio::test]
async fn rejects_token_after_logout() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let refresh_token = logged_in_refresh_token(db, &keys, "kaguya").await?;
    let service = AuthService::new(db, &keys);
    service.logout(Some(&refresh_token)).await;
    let result = service.refresh(Some(&refresh_token)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken(_)))
    ));

    Ok(())
}
