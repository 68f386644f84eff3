use super::*;

/// Tests the startup pass over stored groups.
///
/// Expected: only the inconsistent group is rewritten; a second pass finds nothing
#[tokio::test]
async fn rewrites_inconsistent_groups_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .id("broken")
        .admin_id("owner")
        .admins(vec!["u2".to_string(), "u2".to_string()])
        .build()
        .await?;
    factory::create_group(db).await?;

    let service = GroupService::new(db);

    assert_eq!(service.align_all().await?, 1);
    assert_eq!(service.align_all().await?, 0);

    let fixed = service.get_by_id("broken").await?.unwrap();
    assert_eq!(fixed.admins.as_slice(), ["u2", "owner"]);

    Ok(())
}
