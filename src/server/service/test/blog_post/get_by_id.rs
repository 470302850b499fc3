use super::*;

/// Tests that a private post is hidden from other users and anonymous callers.
///
/// Expected: Ok(None) for anyone but the author
#[tokio::test]
async fn hides_private_post_from_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(BlogPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let post = factory::blog_post::BlogPostFactory::new(db, author.id)
        .public(false)
        .build()
        .await?;

    let service = BlogPostService::new(db);

    assert!(service.get_by_id(post.id, None).await?.is_none());
    assert!(service.get_by_id(post.id, Some(stranger.id)).await?.is_none());
    assert!(service.get_by_id(post.id, Some(author.id)).await?.is_some());

    Ok(())
}

/// Tests that a public post is visible to anonymous callers.
///
/// Expected: Ok(Some(BlogPost)) with the author's username
#[tokio::test]
async fn shows_public_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(BlogPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_blog_post(db, author.id).await?;

    let found = BlogPostService::new(db).get_by_id(post.id, None).await?.unwrap();

    assert_eq!(found.author_username, author.username);

    Ok(())
}
