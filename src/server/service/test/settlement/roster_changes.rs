use super::*;

/// Tests re-settling after every payment was removed.
///
/// Expected: both income rows deleted, FIELD_RENT kept
#[tokio::test]
async fn empty_paid_roster_deletes_income_and_keeps_rent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscribers = factory::helpers::create_players(db, "g1", 1, true).await?;
    let avulsos = factory::helpers::create_players(db, "g1", 1, false).await?;
    let everyone: Vec<String> = ids(&subscribers).into_iter().chain(ids(&avulsos)).collect();
    let (_, game) = factory::helpers::create_match_with_field(
        db,
        "g1",
        100.0,
        everyone.clone(),
        everyone,
    )
    .await?;

    let service = SettlementService::new(db);
    service.settle(&Match::from_entity(game.clone())).await?;
    assert!(stored(db, &format!("tx_mensal_{}", game.id)).await?.is_some());

    let game = set_paid(db, game, Vec::new()).await?;
    let report = service.settle(&Match::from_entity(game.clone())).await?;

    assert_eq!(
        report.action_for(TransactionCategory::MatchRevenueMensal),
        Some(&SettlementAction::Deleted)
    );
    assert_eq!(
        report.action_for(TransactionCategory::MatchRevenueAvulso),
        Some(&SettlementAction::Deleted)
    );
    assert!(stored(db, &format!("tx_mensal_{}", game.id)).await?.is_none());
    assert!(stored(db, &format!("tx_avulso_{}", game.id)).await?.is_none());
    assert_eq!(
        stored(db, &format!("tx_field_{}", game.id)).await?.unwrap().amount,
        100.0
    );

    Ok(())
}

/// Tests re-settling after the field rate dropped to 0.
///
/// Expected: FIELD_RENT deleted
#[tokio::test]
async fn zero_rate_deletes_field_rent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (field, game) =
        factory::helpers::create_match_with_field(db, "g1", 100.0, Vec::new(), Vec::new())
            .await?;
    let game = Match::from_entity(game);

    let service = SettlementService::new(db);
    service.settle(&game).await?;
    assert!(stored(db, &format!("tx_field_{}", game.id)).await?.is_some());

    let mut active_field: entity::field::ActiveModel = field.into();
    active_field.hourly_rate = ActiveValue::Set(0.0);
    active_field.update(db).await?;

    let report = service.settle(&game).await?;

    assert_eq!(
        report.action_for(TransactionCategory::FieldRent),
        Some(&SettlementAction::Deleted)
    );
    assert!(stored(db, &format!("tx_field_{}", game.id)).await?.is_none());

    Ok(())
}

/// Tests that a changed paid roster updates existing income in place.
///
/// Expected: MATCH_REVENUE_AVULSO updated from 25 to 50
#[tokio::test]
async fn added_payment_updates_income() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, "g1", 4, false).await?;
    let (_, game) = factory::helpers::create_match_with_field(
        db,
        "g1",
        100.0,
        ids(&players),
        vec![players[0].id.clone()],
    )
    .await?;

    let service = SettlementService::new(db);
    service.settle(&Match::from_entity(game.clone())).await?;

    let game = set_paid(db, game, ids(&players[..2])).await?;
    let report = service.settle(&Match::from_entity(game.clone())).await?;

    assert_eq!(
        report.action_for(TransactionCategory::MatchRevenueAvulso),
        Some(&SettlementAction::Updated)
    );
    assert_eq!(
        stored(db, &format!("tx_avulso_{}", game.id)).await?.unwrap().amount,
        50.0
    );

    Ok(())
}
