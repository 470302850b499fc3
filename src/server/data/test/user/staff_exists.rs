use super::*;

/// Tests staff detection with only regular accounts.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.staff_exists().await?);

    Ok(())
}

/// Tests staff detection once a staff account exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_staff_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_staff_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.staff_exists().await?);

    Ok(())
}
