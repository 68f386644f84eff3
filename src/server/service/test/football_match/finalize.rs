use super::*;

/// Tests finalizing with the final rosters in the request body.
///
/// Expected: match finished with new rosters and income settled
#[tokio::test]
async fn applies_rosters_and_settles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = MatchLockService::new();

    let players = factory::helpers::create_players(db, "g1", 2, true).await?;
    let roster: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 100.0, Vec::new(), Vec::new())
            .await?;

    let service = MatchService::new(db, &locks);
    let finished = service
        .finalize(
            &game.id,
            UpdateMatchParams {
                confirmed_player_ids: Some(roster.clone().into()),
                paid_player_ids: Some(roster.into()),
                score_a: Some(5),
                score_b: Some(3),
                ..Default::default()
            },
        )
        .await?;

    assert!(finished.finished);
    assert_eq!(finished.score_a, 5);

    let mensal = entity::prelude::Transaction::find_by_id(format!("tx_mensal_{}", game.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(mensal.amount, 100.0);

    Ok(())
}

/// Tests finalizing a match that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = MatchLockService::new();

    let result = MatchService::new(db, &locks)
        .finalize("missing", UpdateMatchParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a later partial update of a finished match re-settles it.
///
/// Expected: removing the only payer deletes the income row
#[tokio::test]
async fn update_of_finished_match_resettles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = MatchLockService::new();

    let players = factory::helpers::create_players(db, "g1", 1, false).await?;
    let roster = vec![players[0].id.clone()];
    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 40.0, roster.clone(), roster).await?;

    let service = MatchService::new(db, &locks);
    service
        .finalize(&game.id, UpdateMatchParams::default())
        .await?;
    let avulso_id = format!("tx_avulso_{}", game.id);
    assert!(entity::prelude::Transaction::find_by_id(avulso_id.as_str())
        .one(db)
        .await?
        .is_some());

    service
        .update(
            &game.id,
            UpdateMatchParams {
                paid_player_ids: Some(Default::default()),
                ..Default::default()
            },
        )
        .await?;

    assert!(entity::prelude::Transaction::find_by_id(avulso_id.as_str())
        .one(db)
        .await?
        .is_none());

    Ok(())
}
