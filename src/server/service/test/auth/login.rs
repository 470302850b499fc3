use super::*;

/// Tests logging in with correct credentials.
///
/// Expected: Ok with an access and a refresh token for the user
#[tokio::test]
async fn issues_token_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let service = AuthService::new(db, &keys);
    let registered = service.register(register_param("miyuki")).await?;
    let (user, pair) = service.login(login_dto("miyuki", PASSWORD)).await?;

    assert_eq!(user.id, registered.id);
    assert_eq!(pair.access.claims.token_type, TokenType::Access);
    assert_eq!(pair.refresh.claims.token_type, TokenType::Refresh);
    assert_eq!(pair.access.claims.user_id(), Some(user.id));

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let service = AuthService::new(db, &keys);
    service.register(register_param("miyuki")).await?;
    let result = service.login(login_dto("miyuki", "not-the-password")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as a user that does not exist.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let result = AuthService::new(db, &keys)
        .login(login_dto("nobody", PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with a blank password.
///
/// Expected: Err(AppError::Validation) on `password`
#[tokio::test]
async fn rejects_blank_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let result = AuthService::new(db, &keys)
        .login(login_dto("miyuki", ""))
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains("password")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
