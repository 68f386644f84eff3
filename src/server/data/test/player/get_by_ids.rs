use super::*;

/// Tests batch lookup of players by id.
///
/// Verifies that every existing id is returned keyed by id and that unknown ids
/// are simply absent.
///
/// Expected: Ok with map containing the two existing players
#[tokio::test]
async fn returns_existing_players_keyed_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let p1 = factory::player::PlayerFactory::new(db, "g1")
        .monthly_subscriber(true)
        .build()
        .await?;
    let p2 = factory::create_player(db, "g1").await?;

    let repo = PlayerRepository::new(db);
    let players = repo
        .get_by_ids(&[p1.id.clone(), p2.id.clone(), "ghost".to_string()])
        .await?;

    assert_eq!(players.len(), 2);
    assert!(players[&p1.id].is_monthly_subscriber);
    assert!(!players[&p2.id].is_monthly_subscriber);
    assert!(!players.contains_key("ghost"));

    Ok(())
}

/// Tests that an empty id list short-circuits to an empty map.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "g1").await?;

    let repo = PlayerRepository::new(db);
    let players = repo.get_by_ids(&[]).await?;

    assert!(players.is_empty());

    Ok(())
}
