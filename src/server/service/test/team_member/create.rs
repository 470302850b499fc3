use super::*;

/// Tests adding two members with the same institute e-mail.
///
/// Expected: Err(AppError::Validation) on `institute_email`
#[tokio::test]
async fn rejects_duplicate_institute_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeamMemberService::new(db);
    service
        .create(create_param("Shinobu", Some("shinobu@institute.edu")))
        .await?;
    let result = service
        .create(create_param("Kanao", Some("shinobu@institute.edu")))
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains("institute_email")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests adding several members without an institute e-mail.
///
/// Expected: Ok for each, missing e-mails never collide
#[tokio::test]
async fn allows_missing_emails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(TeamMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeamMemberService::new(db);
    service.create(create_param("Tanjiro", None)).await?;
    service.create(create_param("Nezuko", None)).await?;

    assert_eq!(service.get_all().await?.len(), 2);

    Ok(())
}
