use super::*;
use sea_orm::ConnectionTrait;

/// Tests that a failed write in one category does not block the others.
///
/// The database rejects every FIELD_RENT insert while one subscriber confirms and pays
/// for a 100 rent.
///
/// Expected: FIELD_RENT reported as failed and not stored, MATCH_REVENUE_MENSAL 100
/// created, MATCH_REVENUE_AVULSO unchanged
#[tokio::test]
async fn failed_category_does_not_block_the_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE TRIGGER reject_field_rent BEFORE INSERT ON \"transaction\" \
         WHEN NEW.category = 'FIELD_RENT' \
         BEGIN SELECT RAISE(ABORT, 'field rent rejected'); END;",
    )
    .await?;

    let players = factory::helpers::create_players(db, "g1", 1, true).await?;
    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 100.0, ids(&players), ids(&players))
            .await?;

    let report = SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    assert!(report.has_failures());
    assert!(matches!(
        report.action_for(TransactionCategory::FieldRent),
        Some(SettlementAction::Failed(_))
    ));
    assert_eq!(
        report.action_for(TransactionCategory::MatchRevenueMensal),
        Some(&SettlementAction::Created)
    );
    assert_eq!(
        report.action_for(TransactionCategory::MatchRevenueAvulso),
        Some(&SettlementAction::Unchanged)
    );

    assert!(stored(db, &format!("tx_field_{}", game.id)).await?.is_none());
    let mensal = stored(db, &format!("tx_mensal_{}", game.id)).await?.unwrap();
    assert_eq!(mensal.amount, 100.0);

    Ok(())
}
