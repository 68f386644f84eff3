use super::*;

/// Tests overwriting a group's rosters.
///
/// Expected: Ok with the new rosters persisted
#[tokio::test]
async fn persists_roster_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_group(db).await?;
    let mut group = Group::from_entity(model);
    group.pending_requests.insert("u9");

    let repo = GroupRepository::new(db);
    repo.update(group.clone()).await?;

    let stored = repo.get_by_id(&group.id).await?.unwrap();
    assert_eq!(stored.pending_requests.as_slice(), ["u9"]);

    Ok(())
}

/// Tests updating a group that was never stored.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_group(db).await?;
    let mut group = Group::from_entity(model);
    group.id = "missing".to_string();

    let repo = GroupRepository::new(db);
    let result = repo.update(group).await;

    assert!(result.is_err());

    Ok(())
}
