use super::*;

/// Tests picking the first transaction of one category attached to a match.
///
/// Expected: Ok(Some) with the lowest id of that category, Ok(None) for another match or
/// a category the match has no rows in
#[tokio::test]
async fn returns_lowest_id_within_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (id, category) in [
        ("tx_a_field", "FIELD_RENT"),
        ("tx_m1_b", "MATCH_REVENUE"),
        ("tx_m1_a", "MATCH_REVENUE"),
    ] {
        factory::transaction::TransactionFactory::new(db, "g1")
            .id(id)
            .category(category)
            .related_match_id(Some("m1".to_string()))
            .build()
            .await?;
    }

    let repo = TransactionRepository::new(db);

    let first = repo
        .get_first_by_match_and_category("m1", "MATCH_REVENUE")
        .await?
        .unwrap();
    assert_eq!(first.id, "tx_m1_a");
    assert!(repo
        .get_first_by_match_and_category("m1", "MATCH_REVENUE_AVULSO")
        .await?
        .is_none());
    assert!(repo
        .get_first_by_match_and_category("m2", "MATCH_REVENUE")
        .await?
        .is_none());

    Ok(())
}
