use super::*;

/// Tests overwriting a field's rate.
///
/// Expected: Ok with new rate stored
#[tokio::test]
async fn persists_new_rate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Field)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut field = Field::from_entity(factory::create_field(db, "g1").await?);
    field.hourly_rate = 0.0;

    let repo = FieldRepository::new(db);
    let updated = repo.update(field.clone()).await?;

    assert_eq!(updated.hourly_rate, 0.0);
    assert_eq!(repo.get_by_id(&field.id).await?.unwrap().hourly_rate, 0.0);

    Ok(())
}
