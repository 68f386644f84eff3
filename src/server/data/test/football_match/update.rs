use super::*;

/// Tests persisting roster and finished flag changes.
///
/// Expected: Ok with rosters stored in order
#[tokio::test]
async fn persists_rosters_and_finished_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut game = Match::from_entity(factory::create_match(db, "g1", "f1").await?);
    game.confirmed_player_ids.insert("p2");
    game.confirmed_player_ids.insert("p1");
    game.paid_player_ids.insert("p1");
    game.finished = true;

    let repo = MatchRepository::new(db);
    repo.update(game.clone()).await?;

    let stored = repo.get_by_id(&game.id).await?.unwrap();
    assert!(stored.finished);
    assert_eq!(stored.confirmed_player_ids.as_slice(), ["p2", "p1"]);
    assert_eq!(stored.paid_player_ids.as_slice(), ["p1"]);

    Ok(())
}
