use super::*;

/// Tests registering a new account.
///
/// Expected: Ok(User) that is not staff
#[tokio::test]
async fn creates_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = AuthService::new(db, &keys)
        .register(register_param("chika"))
        .await?;

    assert_eq!(user.username, "chika");
    assert_eq!(user.email, "chika@example.com");
    assert!(!user.is_staff);

    Ok(())
}

/// Tests registering a username that already exists.
///
/// Expected: Err(AppError::Validation) on `username`
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let service = AuthService::new(db, &keys);
    service.register(register_param("chika")).await?;
    let result = service.register(register_param("chika")).await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains("username")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
