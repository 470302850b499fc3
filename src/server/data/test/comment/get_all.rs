use super::*;

/// Tests listing comments for one parent.
///
/// Verifies that the filter matches both parent type and id, so a chapter and a
/// blog post sharing an id do not mix.
///
/// Expected: Ok with only the blog comments, oldest first
#[tokio::test]
async fn filters_by_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let first = factory::create_comment(db, author.id, "blog", 1).await?;
    factory::create_comment(db, author.id, "chapter", 1).await?;
    let second = factory::create_comment(db, author.id, "blog", 1).await?;

    let repo = CommentRepository::new(db);
    let comments = repo
        .get_all(CommentFilter {
            parent: Some(CommentParent::Blog(1)),
        })
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(comments[0].author_username, author.username);

    let all = repo.get_all(CommentFilter::default()).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
