use super::*;

/// Tests the reference split of a 100 rent among 5 confirmed players.
///
/// Four players paid: three subscribers and one per-match player. Each confirmed
/// player costs 20, so subscribers owe 60 and the per-match player 20.
///
/// Expected: FIELD_RENT 100, MATCH_REVENUE_MENSAL 60, MATCH_REVENUE_AVULSO 20
#[tokio::test]
async fn splits_rent_between_subscribers_and_per_match_payers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscribers = factory::helpers::create_players(db, "g1", 3, true).await?;
    let avulsos = factory::helpers::create_players(db, "g1", 2, false).await?;

    let confirmed: Vec<String> = ids(&subscribers).into_iter().chain(ids(&avulsos)).collect();
    let paid: Vec<String> = ids(&subscribers)
        .into_iter()
        .chain(std::iter::once(avulsos[0].id.clone()))
        .collect();
    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 100.0, confirmed, paid).await?;

    let report = SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    assert!(!report.has_failures());
    assert_eq!(
        report.action_for(TransactionCategory::FieldRent),
        Some(&SettlementAction::Created)
    );

    let field = stored(db, &format!("tx_field_{}", game.id)).await?.unwrap();
    assert_eq!(field.amount, 100.0);
    assert_eq!(field.kind, "EXPENSE");
    assert_eq!(field.category, "FIELD_RENT");

    let mensal = stored(db, &format!("tx_mensal_{}", game.id)).await?.unwrap();
    assert_eq!(mensal.amount, 60.0);
    assert_eq!(mensal.kind, "INCOME");
    assert_eq!(mensal.category, "MATCH_REVENUE_MENSAL");

    let avulso = stored(db, &format!("tx_avulso_{}", game.id)).await?.unwrap();
    assert_eq!(avulso.amount, 20.0);
    assert_eq!(avulso.category, "MATCH_REVENUE_AVULSO");

    Ok(())
}

/// Tests that an empty confirmed roster produces no income.
///
/// Paid players are present but nobody confirmed, so the cost per person is 0.
///
/// Expected: only FIELD_RENT exists
#[tokio::test]
async fn empty_confirmed_roster_creates_no_income() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, "g1", 2, true).await?;
    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 80.0, Vec::new(), ids(&players))
            .await?;

    SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    assert_eq!(
        stored(db, &format!("tx_field_{}", game.id)).await?.unwrap().amount,
        80.0
    );
    assert!(stored(db, &format!("tx_mensal_{}", game.id)).await?.is_none());
    assert!(stored(db, &format!("tx_avulso_{}", game.id)).await?.is_none());

    Ok(())
}

/// Tests that a paid id with no player row counts in neither bucket.
///
/// Expected: only the resolvable per-match player is billed
#[tokio::test]
async fn unknown_paid_player_counts_in_neither_bucket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, "g1", 1, false).await?;
    let mut confirmed = ids(&players);
    confirmed.push("ghost".to_string());
    let (_, game) = factory::helpers::create_match_with_field(
        db,
        "g1",
        50.0,
        confirmed.clone(),
        confirmed,
    )
    .await?;

    SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    assert!(stored(db, &format!("tx_mensal_{}", game.id)).await?.is_none());
    assert_eq!(
        stored(db, &format!("tx_avulso_{}", game.id)).await?.unwrap().amount,
        25.0
    );

    Ok(())
}

/// Tests settling a match whose field does not exist.
///
/// The rate falls back to 0, so neither rent nor income is recorded.
///
/// Expected: Ok with no derived rows
#[tokio::test]
async fn missing_field_settles_with_zero_rent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, "g1", 2, false).await?;
    let game = factory::football_match::MatchFactory::new(db, "g1", "missing_field")
        .confirmed(ids(&players))
        .paid(ids(&players))
        .build()
        .await?;

    let report = SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    assert!(report
        .outcomes
        .iter()
        .all(|(_, action)| *action == SettlementAction::Unchanged));
    assert!(stored(db, &format!("tx_field_{}", game.id)).await?.is_none());
    assert!(stored(db, &format!("tx_avulso_{}", game.id)).await?.is_none());

    Ok(())
}
