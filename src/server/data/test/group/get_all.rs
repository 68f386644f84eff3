use super::*;

/// Tests reading groups back with their stored rosters.
///
/// Verifies that JSON roster columns are decoded into id sets in stored order.
///
/// Expected: Ok with both groups returned
#[tokio::test]
async fn returns_groups_with_rosters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .id("g1")
        .admin_id("owner")
        .members(vec!["owner".to_string(), "u2".to_string()])
        .build()
        .await?;
    factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert_eq!(groups.len(), 2);
    let g1 = groups.iter().find(|g| g.id == "g1").unwrap();
    assert_eq!(g1.members.as_slice(), ["owner", "u2"]);

    Ok(())
}

/// Tests that duplicated ids stored by older clients are collapsed on read.
///
/// Expected: Ok with each member listed once
#[tokio::test]
async fn collapses_duplicate_roster_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .members(vec!["u1".to_string(), "u1".to_string(), "u2".to_string()])
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert_eq!(groups[0].members.as_slice(), ["u1", "u2"]);

    Ok(())
}
