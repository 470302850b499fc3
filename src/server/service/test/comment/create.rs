use super::*;

/// Tests commenting on a chapter that exists.
///
/// Expected: Ok(Comment) attached to the chapter
#[tokio::test]
async fn attaches_to_existing_chapter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;
    let chapter = factory::create_chapter(db, fan_fiction.id, 1).await?;

    let comment = CommentService::new(db)
        .create(create_param(author.id, CommentParent::Chapter(chapter.id)))
        .await?;

    assert_eq!(comment.parent, CommentParent::Chapter(chapter.id));
    assert_eq!(comment.author_id, author.id);

    Ok(())
}

/// Tests commenting on a fan-fiction that does not exist.
///
/// Expected: Err(AppError::Validation) on `parent_id`
#[tokio::test]
async fn rejects_missing_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let result = CommentService::new(db)
        .create(create_param(author.id, CommentParent::FanFiction(77)))
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains("parent_id")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests commenting on someone else's private blog post.
///
/// Expected: Err(AppError::Validation) on `parent_id`
#[tokio::test]
async fn rejects_foreign_private_blog_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(BlogPost)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let post = factory::blog_post::BlogPostFactory::new(db, owner.id)
        .public(false)
        .build()
        .await?;

    let result = CommentService::new(db)
        .create(create_param(commenter.id, CommentParent::Blog(post.id)))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the author commenting on their own private blog post.
///
/// Expected: Ok(Comment)
#[tokio::test]
async fn allows_own_private_blog_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(BlogPost)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let post = factory::blog_post::BlogPostFactory::new(db, owner.id)
        .public(false)
        .build()
        .await?;

    let comment = CommentService::new(db)
        .create(create_param(owner.id, CommentParent::Blog(post.id)))
        .await?;

    assert_eq!(comment.parent, CommentParent::Blog(post.id));

    Ok(())
}

/// Tests commenting on a chapter deleted before the comment is written.
///
/// Verifies the rejected write leaves no comment behind.
///
/// Expected: Err(AppError::Validation) on `parent_id` and an empty comment table
#[tokio::test]
async fn rejects_deleted_chapter_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fan_fiction_tables()
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, fan_fiction) = factory::helpers::create_fan_fiction_with_author(db).await?;
    let chapter = factory::create_chapter(db, fan_fiction.id, 1).await?;
    ChapterService::new(db).delete(chapter.id).await?;

    let result = CommentService::new(db)
        .create(create_param(author.id, CommentParent::Chapter(chapter.id)))
        .await;

    assert!(matches!(result, Err(AppError::Validation(ref e)) if e.contains("parent_id")));
    assert_eq!(Comment::find().count(db).await?, 0);

    Ok(())
}
