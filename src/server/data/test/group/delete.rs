use super::*;

/// Tests deleting an existing group and then a missing one.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    assert!(repo.delete(&group.id).await?);
    assert!(!repo.delete(&group.id).await?);
    assert!(repo.get_by_id(&group.id).await?.is_none());

    Ok(())
}
