use super::*;

/// Tests fetching a field and a missing id.
///
/// Expected: Ok(Some) with stored rate, Ok(None) for unknown id
#[tokio::test]
async fn returns_field_or_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Field)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let field = factory::field::FieldFactory::new(db, "g1")
        .hourly_rate(180.0)
        .build()
        .await?;

    let repo = FieldRepository::new(db);

    let found = repo.get_by_id(&field.id).await?.unwrap();
    assert_eq!(found.hourly_rate, 180.0);
    assert!(repo.get_by_id("missing").await?.is_none());

    Ok(())
}
