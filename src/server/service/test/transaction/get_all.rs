use super::*;

/// Tests that a stored row with an unknown type surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::transaction::TransactionFactory::new(db, "g1")
        .kind("REFUND")
        .build()
        .await?;

    let result = TransactionService::new(db).get_all(Some("g1")).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
