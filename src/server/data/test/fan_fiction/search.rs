use super::*;

/// Tests searching fan-fiction by a tag name substring.
///
/// Verifies that only stories linked to a matching tag are returned when the
/// term appears in neither title nor summary.
///
/// Expected: Ok with the single tagged story
#[tokio::test]
async fn matches_tag_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let romance = factory::tag::create_tag_named(db, "Romance").await?;
    let horror = factory::tag::create_tag_named(db, "Horror").await?;

    FanFictionFactory::new(db, author.id)
        .title("Cherry blossoms")
        .tags(vec![romance.id])
        .build()
        .await?;
    FanFictionFactory::new(db, author.id)
        .title("Night shift")
        .tags(vec![horror.id])
        .build()
        .await?;

    let repo = FanFictionRepository::new(db);
    let page = repo.search(&query(Some("roman"), None, None)).await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].title, "Cherry blossoms");
    assert_eq!(page.results[0].tags[0].name, "Romance");

    Ok(())
}

/// Tests that every search term must match.
///
/// Expected: Ok with only the story matching both terms
#[tokio::test]
async fn requires_every_term() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    FanFictionFactory::new(db, author.id)
        .title("Dragon rider")
        .summary("A tale of the sky")
        .build()
        .await?;
    FanFictionFactory::new(db, author.id)
        .title("Dragon keeper")
        .summary("A tale of the sea")
        .build()
        .await?;

    let repo = FanFictionRepository::new(db);
    let page = repo.search(&query(Some("DRAGON,sky"), None, None)).await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].title, "Dragon rider");

    Ok(())
}

/// Tests limit/offset pagination.
///
/// Verifies that the count covers every match while results hold one page.
///
/// Expected: count 12, 10 results on the first page and 2 on the second
#[tokio::test]
async fn paginates_with_default_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    for _ in 0..12 {
        factory::create_fan_fiction(db, author.id).await?;
    }

    let repo = FanFictionRepository::new(db);

    let first = repo.search(&query(None, None, None)).await?;
    assert_eq!(first.count, 12);
    assert_eq!(first.results.len(), 10);

    let second = repo.search(&query(None, None, Some(10))).await?;
    assert_eq!(second.count, 12);
    assert_eq!(second.results.len(), 2);

    Ok(())
}

/// Tests that `%` and `_` in a search term are matched literally.
///
/// Expected: Ok with no results for bare wildcards, and the one story whose
/// title contains them for a literal term
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    FanFictionFactory::new(db, author.id)
        .title("Plain")
        .summary("Nothing special")
        .build()
        .await?;
    FanFictionFactory::new(db, author.id)
        .title("100% snake_case")
        .summary("Other")
        .build()
        .await?;

    let repo = FanFictionRepository::new(db);

    assert_eq!(repo.search(&query(Some("_"), None, None)).await?.count, 1);
    assert_eq!(repo.search(&query(Some("%"), None, None)).await?.count, 1);
    assert_eq!(repo.search(&query(Some("0%"), None, None)).await?.count, 1);
    assert_eq!(repo.search(&query(Some("e_c"), None, None)).await?.count, 1);
    assert_eq!(repo.search(&query(Some("a_n"), None, None)).await?.count, 0);

    Ok(())
}

/// Tests searching when no story contains the wildcard characters.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn bare_wildcards_match_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fan_fiction_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    for title in ["Plain", "Other"] {
        FanFictionFactory::new(db, author.id)
            .title(title)
            .summary("Summary")
            .build()
            .await?;
    }

    let repo = FanFictionRepository::new(db);

    assert_eq!(repo.search(&query(Some("%"), None, None)).await?.count, 0);
    assert_eq!(repo.search(&query(Some("_"), None, None)).await?.count, 0);

    Ok(())
}
