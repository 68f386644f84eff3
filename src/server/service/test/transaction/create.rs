use super::*;

/// Tests rejecting a non-finite amount.
///
/// Expected: Err(ValidationError::InvalidAmount) and nothing stored
#[tokio::test]
async fn rejects_non_finite_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TransactionService::new(db)
        .create(CreateTransactionParams {
            id: "tx_bad".to_string(),
            group_id: "g1".to_string(),
            description: "Bola nova".to_string(),
            amount: f64::NAN,
            kind: TransactionType::Expense,
            date: "2025-10-18".to_string(),
            category: "EQUIPMENT".to_string(),
            related_player_id: None,
            related_match_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidAmount(_)))
    ));
    assert!(entity::prelude::Transaction::find().all(db).await?.is_empty());

    Ok(())
}
