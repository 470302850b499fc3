use super::*;

/// Tests admin permission for a staff user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_staff_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let staff = factory::user::create_staff_user(db).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, staff.id));
    let user = guard.require(&[Permission::Admin]).await?;

    assert!(user.is_staff);

    Ok(())
}

/// Tests admin permission for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::create_user(db).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, user.id));
    let result = guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}
