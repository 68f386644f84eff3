use super::*;

/// Tests that only rows of the given match and category are removed.
///
/// Expected: Ok(2) with other matches and categories untouched
#[tokio::test]
async fn removes_only_matching_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["tx_a", "tx_b"] {
        factory::transaction::TransactionFactory::new(db, "g1")
            .id(id)
            .category("MATCH_REVENUE")
            .related_match_id(Some("m1".to_string()))
            .build()
            .await?;
    }
    factory::transaction::TransactionFactory::new(db, "g1")
        .id("tx_other_match")
        .category("MATCH_REVENUE")
        .related_match_id(Some("m2".to_string()))
        .build()
        .await?;
    factory::transaction::TransactionFactory::new(db, "g1")
        .id("tx_field_m1")
        .kind("EXPENSE")
        .category("FIELD_RENT")
        .related_match_id(Some("m1".to_string()))
        .build()
        .await?;

    let repo = TransactionRepository::new(db);
    let removed = repo
        .delete_by_match_and_category("m1", "MATCH_REVENUE")
        .await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_id("tx_other_match").await?.is_some());
    assert!(repo.get_by_id("tx_field_m1").await?.is_some());

    Ok(())
}
