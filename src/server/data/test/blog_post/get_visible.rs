use super::*;

/// Tests blog visibility for anonymous callers.
///
/// Expected: Ok with only the public post
#[tokio::test]
async fn anonymous_sees_public_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BlogPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    BlogPostFactory::new(db, author.id).title("open").build().await?;
    BlogPostFactory::new(db, author.id)
        .title("draft")
        .public(false)
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let posts = repo.get_visible(None).await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "open");
    assert_eq!(posts[0].author_username, author.username);

    Ok(())
}

/// Tests blog visibility for authenticated callers.
///
/// Verifies that a caller sees public posts plus their own private posts, but
/// not the private posts of other users.
///
/// Expected: Ok with the public post and the caller's draft
#[tokio::test]
async fn author_sees_own_private_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::BlogPost)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    BlogPostFactory::new(db, other.id).title("open").build().await?;
    BlogPostFactory::new(db, author.id)
        .title("mine")
        .public(false)
        .build()
        .await?;
    BlogPostFactory::new(db, other.id)
        .title("theirs")
        .public(false)
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let mut titles: Vec<String> = repo
        .get_visible(Some(author.id))
        .await?
        .into_iter()
        .map(|p| p.title)
        .collect();
    titles.sort();

    assert_eq!(titles, vec!["mine", "open"]);

    Ok(())
}
