use super::*;

/// Tests listing matches newest first within a group.
///
/// Expected: Ok with the group's matches ordered by date descending
#[tokio::test]
async fn lists_group_matches_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::football_match::MatchFactory::new(db, "g1", "f1")
        .id("old")
        .date("2025-09-01")
        .build()
        .await?;
    factory::football_match::MatchFactory::new(db, "g1", "f1")
        .id("new")
        .date("2025-10-01")
        .build()
        .await?;
    factory::create_match(db, "g2", "f2").await?;

    let repo = MatchRepository::new(db);
    let matches = repo.get_all(Some("g1")).await?;

    let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["new", "old"]);

    Ok(())
}
