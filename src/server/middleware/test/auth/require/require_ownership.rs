use super::*;

/// Tests blog ownership for the author.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_blog_post_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let author = factory::create_user(db).await?;
    let post = factory::create_blog_post(db, author.id).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, author.id));

    guard.require(&[Permission::BlogPostAuthor(post.id)]).await?;

    Ok(())
}

/// Tests blog ownership for another user, staff included.
///
/// Verifies that staff status does not grant write access to other users'
/// posts.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_user_on_blog_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let author = factory::create_user(db).await?;
    let staff = factory::user::create_staff_user(db).await?;
    let post = factory::create_blog_post(db, author.id).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, staff.id));
    let result = guard.require(&[Permission::BlogPostAuthor(post.id)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests ownership of an object that does not exist.
///
/// Verifies that existence is checked before ownership.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_object_as_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::create_user(db).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, user.id));

    for permission in [
        Permission::BlogPostAuthor(99),
        Permission::FanFictionAuthor(99),
        Permission::ChapterAuthor(99),
        Permission::CommentAuthor(99),
    ] {
        let result = guard.require(&[permission]).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    Ok(())
}

/// Tests chapter ownership through the parent fan-fiction.
///
/// Expected: Ok for the fan-fiction author, AccessDenied for anyone else
#[tokio::test]
async fn checks_chapter_through_fan_fiction_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let (author, story) = factory::helpers::create_fan_fiction_with_author(db).await?;
    let chapter = factory::create_chapter(db, story.id, 1).await?;
    let other = factory::create_user(db).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, author.id));
    guard.require(&[Permission::ChapterAuthor(chapter.id)]).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, other.id));
    let result = guard.require(&[Permission::ChapterAuthor(chapter.id)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests comment ownership.
///
/// Expected: Ok for the comment author, AccessDenied for the blog author
#[tokio::test]
async fn checks_comment_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let blogger = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let post = factory::create_blog_post(db, blogger.id).await?;
    let comment = factory::create_comment(db, commenter.id, "blog", post.id).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, commenter.id));
    guard.require(&[Permission::CommentAuthor(comment.id)]).await?;

    let guard = AuthGuard::from_token(db, &keys, access_token(&keys, blogger.id));
    let result = guard.require(&[Permission::CommentAuthor(comment.id)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests fan-fiction ownership for an unauthenticated caller.
///
/// Verifies that authentication is checked before the object is loaded.
///
/// Expected: Err(AuthError::NotAuthenticated) even for a missing object
#[tokio::test]
async fn checks_authentication_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let guard = AuthGuard::from_token(db, &keys, None);
    let result = guard.require(&[Permission::FanFictionAuthor(99)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}
