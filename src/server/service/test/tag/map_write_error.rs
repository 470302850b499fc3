use super::*;
use crate::server::{data::tag::TagRepository, model::tag::TagRecord};
use sea_orm::DbErr;

/// Tests a duplicate insert that slipped past the uniqueness check, as when two
/// identical creates race.
///
/// Expected: Err(AppError::Validation) on `name` and `slug` instead of a database error
#[tokio::test]
async fn reports_unique_violation_as_validation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let record = TagRecord {
        name: "Mecha".to_string(),
        slug: "mecha".to_string(),
    };
    let repo = TagRepository::new(db);
    repo.create(record.clone()).await?;
    let err = repo.create(record.clone()).await.unwrap_err();

    let mapped = TagService::new(db).map_write_error(err, &record, None).await;

    match mapped {
        AppError::Validation(errors) => {
            assert!(errors.contains("name"));
            assert!(errors.contains("slug"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests that unrelated database errors are not rewritten.
///
/// Expected: AppError::DbErr
#[tokio::test]
async fn passes_through_other_errors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let record = TagRecord {
        name: "Isekai".to_string(),
        slug: "isekai".to_string(),
    };
    let mapped = TagService::new(db)
        .map_write_error(DbErr::Custom("disk full".to_string()), &record, None)
        .await;

    assert!(matches!(mapped, AppError::DbErr(_)));

    Ok(())
}
