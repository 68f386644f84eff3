use super::*;

/// Tests PUT semantics: create on first call, replace on the second.
///
/// Expected: created flag true then false, second body persisted
#[tokio::test]
async fn creates_then_replaces() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settlement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = MatchLockService::new();

    let field = factory::create_field(db, "g1").await?;
    let service = MatchService::new(db, &locks);

    let (_, created) = service
        .upsert("m_put", params("ignored", &field.id, false))
        .await?;
    assert!(created);

    let mut replacement = params("m_put", &field.id, true);
    replacement.score_a = 2;
    let (game, created) = service.upsert("m_put", replacement).await?;

    assert!(!created);
    assert_eq!(game.id, "m_put");
    assert_eq!(game.score_a, 2);
    assert!(entity::prelude::Transaction::find_by_id("tx_field_m_put")
        .one(db)
        .await?
        .is_some());

    Ok(())
}
