use super::*;

/// Tests creating the manual revenue row.
///
/// Expected: INCOME row "tx_m1" with category MATCH_REVENUE
#[tokio::test]
async fn creates_revenue_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let transaction = TransactionService::new(db)
        .upsert_match_revenue(revenue("m1", 150.0))
        .await?
        .unwrap();

    assert_eq!(transaction.id, "tx_m1");
    assert_eq!(transaction.amount, 150.0);
    assert_eq!(transaction.kind, TransactionType::Income);
    assert_eq!(transaction.category, "MATCH_REVENUE");

    Ok(())
}

/// Tests that an existing manual revenue row of the match is updated in place.
///
/// Expected: existing row keeps its id and takes the new amount
#[tokio::test]
async fn updates_existing_revenue_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::transaction::TransactionFactory::new(db, "g1")
        .id("tx_a_first")
        .category("MATCH_REVENUE")
        .related_match_id(Some("m1".to_string()))
        .build()
        .await?;

    let transaction = TransactionService::new(db)
        .upsert_match_revenue(revenue("m1", 80.0))
        .await?
        .unwrap();

    assert_eq!(transaction.id, "tx_a_first");
    assert_eq!(transaction.amount, 80.0);
    assert_eq!(entity::prelude::Transaction::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests that a zero total removes the existing row.
///
/// Expected: Ok(None) and no transactions left
#[tokio::test]
async fn zero_total_deletes_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TransactionService::new(db);
    service.upsert_match_revenue(revenue("m1", 60.0)).await?;

    let result = service.upsert_match_revenue(revenue("m1", 0.0)).await?;

    assert!(result.is_none());
    assert!(entity::prelude::Transaction::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that manual revenue leaves the rows written by settlement untouched.
///
/// Two per-match players confirm and pay for a 100 rent, so settlement writes
/// FIELD_RENT 100 and MATCH_REVENUE_AVULSO 100 before the manual entry is made.
///
/// Expected: a separate "tx_<matchId>" row is created and later removed, while both
/// settled rows keep their amounts throughout
#[tokio::test]
async fn leaves_settled_rows_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = factory::helpers::create_players(db, "g1", 2, false).await?;
    let roster: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
    let (_, game) =
        factory::helpers::create_match_with_field(db, "g1", 100.0, roster.clone(), roster)
            .await?;

    SettlementService::new(db)
        .settle(&Match::from_entity(game.clone()))
        .await?;

    let field_id = format!("tx_field_{}", game.id);
    let avulso_id = format!("tx_avulso_{}", game.id);
    let service = TransactionService::new(db);

    let transaction = service
        .upsert_match_revenue(revenue(&game.id, 7.0))
        .await?
        .unwrap();

    assert_eq!(transaction.id, format!("tx_{}", game.id));
    assert_eq!(transaction.category, "MATCH_REVENUE");
    let avulso = entity::prelude::Transaction::find_by_id(&avulso_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(avulso.amount, 100.0);
    assert_eq!(avulso.category, "MATCH_REVENUE_AVULSO");

    let result = service.upsert_match_revenue(revenue(&game.id, 0.0)).await?;

    assert!(result.is_none());
    let mut remaining: Vec<String> = entity::prelude::Transaction::find()
        .all(db)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    remaining.sort();
    assert_eq!(remaining, vec![avulso_id, field_id]);

    Ok(())
}
