use super::*;

/// Tests filtering players by group.
///
/// Expected: Ok with only the requested group's players
#[tokio::test]
async fn filters_by_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, "g1").await?;
    factory::create_player(db, "g1").await?;
    factory::create_player(db, "g2").await?;

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.get_all(Some("g1")).await?.len(), 2);
    assert_eq!(repo.get_all(Some("g2")).await?.len(), 1);
    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}
