use super::*;

/// Tests checking ids that all exist.
///
/// Expected: Ok(())
#[tokio::test]
async fn accepts_existing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_tag(db).await?;
    let second = factory::create_tag(db).await?;

    check_tag_ids(db, &[first.id, second.id]).await?;

    Ok(())
}

/// Tests checking a list containing an unknown id.
///
/// Expected: Err(AppError::Validation) naming the unknown id on `tag_ids`
#[tokio::test]
async fn rejects_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let result = check_tag_ids(db, &[tag.id, 999]).await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(
                errors.fields()["tag_ids"],
                vec!["Invalid pk \"999\" - object does not exist.".to_string()]
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
