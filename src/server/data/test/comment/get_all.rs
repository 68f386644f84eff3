use super::*;

/// Tests filtering comments by match.
///
/// Expected: Ok with the match's comments only
#[tokio::test]
async fn filters_by_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let m1 = factory::create_match(db, "g1", "f1").await?;
    let m2 = factory::create_match(db, "g1", "f1").await?;
    factory::create_comment(db, "g1", &m1.id, "p1").await?;
    factory::create_comment(db, "g1", &m1.id, "p2").await?;
    factory::create_comment(db, "g1", &m2.id, "p1").await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.get_all(None, Some(&m1.id)).await?.len(), 2);
    assert_eq!(repo.get_all(Some("g1"), None).await?.len(), 3);
    assert!(repo.get_all(Some("g2"), None).await?.is_empty());

    Ok(())
}
