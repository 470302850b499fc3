use super::*;

/// Tests that deleting a post removes its comments.
///
/// Expected: Ok(true) and no comments left
#[tokio::test]
async fn deletes_post_comments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(BlogPost)
        .with_table(Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_blog_post(db, author.id).await?;
    factory::create_comment(db, author.id, "blog", post.id).await?;
    factory::create_comment(db, author.id, "blog", post.id).await?;

    let deleted = BlogPostService::new(db).delete(post.id).await?;

    assert!(deleted);
    assert_eq!(Comment::find().count(db).await?, 0);

    Ok(())
}
