use super::*;

/// Tests listing groups a user owns or belongs to.
///
/// Expected: owned and joined groups returned, unrelated and pending ones skipped
#[tokio::test]
async fn returns_owned_and_joined_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .id("owned")
        .admin_id("u1")
        .build()
        .await?;
    factory::group::GroupFactory::new(db)
        .id("joined")
        .members(vec!["u1".to_string()])
        .build()
        .await?;
    factory::group::GroupFactory::new(db)
        .id("pending")
        .pending_requests(vec!["u1".to_string()])
        .build()
        .await?;

    let service = GroupService::new(db);
    let mut ids: Vec<String> = service
        .get_by_user(Some("u1"))
        .await?
        .into_iter()
        .map(|g| g.id)
        .collect();
    ids.sort();

    assert_eq!(ids, ["joined", "owned"]);
    assert!(service.get_by_user(None).await?.is_empty());

    Ok(())
}
