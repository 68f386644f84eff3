use super::*;

/// Tests propagating a profile to every player linked to a user.
///
/// Expected: both linked players renamed, the unrelated one untouched, userId kept
#[tokio::test]
async fn updates_every_linked_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::player::PlayerFactory::new(db, "g1")
        .user_id(Some("acct".to_string()))
        .build()
        .await?;
    let second = factory::player::PlayerFactory::new(db, "g2")
        .user_id(Some("acct".to_string()))
        .build()
        .await?;
    let other = factory::create_player(db, "g1").await?;

    let service = PlayerService::new(db);
    let updated = service
        .update_by_user(
            "acct",
            PlayerProfile {
                nickname: Some("Pelezinho".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated, 2);
    for id in [&first.id, &second.id] {
        let player = service.get_by_id(id).await?.unwrap();
        assert_eq!(player.nickname, "Pelezinho");
        assert_eq!(player.user_id.as_deref(), Some("acct"));
    }
    let untouched = service.get_by_id(&other.id).await?.unwrap();
    assert_eq!(untouched.nickname, other.nickname);

    Ok(())
}

/// Tests a user with no linked players.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_linked_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PlayerService::new(db)
        .update_by_user("nobody", PlayerProfile::default())
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
