use super::*;

/// Tests that derived rows carry the match's group, link and date.
///
/// Expected: every derived row references the match and uses its date
#[tokio::test]
async fn links_rows_to_match_and_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, "g7", 2, true).await?;
    let field = factory::field::FieldFactory::new(db, "g7")
        .name("Arena Central")
        .hourly_rate(120.0)
        .build()
        .await?;
    let game = factory::football_match::MatchFactory::new(db, "g7", &field.id)
        .date("2025-11-02")
        .confirmed(ids(&players))
        .paid(ids(&players))
        .build()
        .await?;

    SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    let rent = stored(db, &format!("tx_field_{}", game.id)).await?.unwrap();
    assert_eq!(rent.description, "Aluguel Campo - Arena Central");
    assert_eq!(rent.group_id, "g7");
    assert_eq!(rent.related_match_id.as_deref(), Some(game.id.as_str()));
    assert_eq!(rent.date, "2025-11-02");

    let mensal = stored(db, &format!("tx_mensal_{}", game.id)).await?.unwrap();
    assert_eq!(mensal.description, "Mensalistas - 2025-11-02");
    assert_eq!(mensal.amount, 120.0);

    Ok(())
}

/// Tests that settling the same match twice changes nothing the second time.
///
/// Expected: second report is all Unchanged and stored rows are identical
#[tokio::test]
async fn settling_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subscribers = factory::helpers::create_players(db, "g1", 2, true).await?;
    let avulsos = factory::helpers::create_players(db, "g1", 1, false).await?;
    let everyone: Vec<String> = ids(&subscribers).into_iter().chain(ids(&avulsos)).collect();
    let (_, game) = factory::helpers::create_match_with_field(
        db,
        "g1",
        90.0,
        everyone.clone(),
        everyone,
    )
    .await?;
    let game = Match::from_entity(game);

    let service = SettlementService::new(db);
    service.settle(&game).await?;
    let first = entity::prelude::Transaction::find().all(db).await?;

    let report = service.settle(&game).await?;
    let second = entity::prelude::Transaction::find().all(db).await?;

    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
    assert!(report
        .outcomes
        .iter()
        .all(|(_, action)| *action == SettlementAction::Unchanged));

    Ok(())
}
