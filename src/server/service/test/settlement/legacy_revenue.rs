use super::*;

/// Tests removal of manual MATCH_REVENUE rows during settlement.
///
/// Verifies that rows of the settled match are removed while the manual revenue of
/// another match is left alone.
///
/// Expected: report counts 1 removed row, other match's row still stored
#[tokio::test]
async fn removes_manual_revenue_of_settled_match_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 60.0, Vec::new(), Vec::new())
            .await?;
    factory::transaction::TransactionFactory::new(db, "g1")
        .id(format!("tx_{}", game.id))
        .category("MATCH_REVENUE")
        .related_match_id(Some(game.id.clone()))
        .build()
        .await?;
    factory::transaction::TransactionFactory::new(db, "g1")
        .id("tx_other_match")
        .category("MATCH_REVENUE")
        .related_match_id(Some("other_match".to_string()))
        .build()
        .await?;

    let report = SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    assert_eq!(report.legacy_removed, 1);
    assert!(stored(db, &format!("tx_{}", game.id)).await?.is_none());
    assert!(stored(db, "tx_other_match").await?.is_some());
    assert!(stored(db, &format!("tx_field_{}", game.id)).await?.is_some());

    Ok(())
}

/// Tests that user-entered rows attached to the match survive settlement.
///
/// Expected: an OTHER-category row linked to the match is kept
#[tokio::test]
async fn keeps_other_categories_linked_to_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 60.0, Vec::new(), Vec::new())
            .await?;
    factory::transaction::TransactionFactory::new(db, "g1")
        .id("tx_ball")
        .kind("EXPENSE")
        .category("EQUIPMENT")
        .related_match_id(Some(game.id.clone()))
        .build()
        .await?;

    let report = SettlementService::new(db)
        .settle(&Match::from_entity(game))
        .await?;

    assert_eq!(report.legacy_removed, 0);
    assert!(stored(db, "tx_ball").await?.is_some());

    Ok(())
}
