use super::*;

/// Tests creating a user account.
///
/// Verifies that the repository stores the account and returns the domain model
/// without exposing the password hash.
///
/// Expected: Ok with matching username, email and staff flag
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserRecord {
            username: "misaki".to_string(),
            email: "misaki@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_staff: false,
        })
        .await?;

    assert_eq!(user.username, "misaki");
    assert_eq!(user.email, "misaki@example.com");
    assert!(!user.is_staff);

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests the unique username constraint.
///
/// Verifies that inserting a second account with the same username fails with
/// a unique constraint violation.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserRecord {
            username: existing.username.clone(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_staff: false,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
