use super::*;

/// Tests the join request flow through approval.
///
/// Expected: user moves from pending to members and the change is persisted
#[tokio::test]
async fn approves_join_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let service = GroupService::new(db);

    service
        .apply_membership(&group.id, MembershipAction::RequestJoin, "u2")
        .await?;
    let pending = service.get_by_id(&group.id).await?.unwrap();
    assert_eq!(pending.pending_requests.as_slice(), ["u2"]);

    service
        .apply_membership(&group.id, MembershipAction::ApproveRequest, "u2")
        .await?;
    let approved = service.get_by_id(&group.id).await?.unwrap();

    assert!(approved.pending_requests.is_empty());
    assert!(approved.members.contains("u2"));

    Ok(())
}

/// Tests that the owner cannot be demoted.
///
/// Expected: Ok(Ignored) and owner still an admin
#[tokio::test]
async fn ignores_demoting_the_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let service = GroupService::new(db);

    let outcome = service
        .apply_membership(&group.id, MembershipAction::DemoteMember, &group.admin_id)
        .await?;

    assert_eq!(outcome, MembershipOutcome::Ignored);
    let stored = service.get_by_id(&group.id).await?.unwrap();
    assert!(stored.admins.contains(&group.admin_id));

    Ok(())
}

/// Tests promoting, demoting and removing a member.
///
/// Expected: admin rights follow each action and removal revokes them
#[tokio::test]
async fn promote_demote_and_remove() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db)
        .members(vec!["owner".to_string(), "u2".to_string()])
        .admin_id("owner")
        .admins(vec!["owner".to_string()])
        .build()
        .await?;
    let service = GroupService::new(db);

    service
        .apply_membership(&group.id, MembershipAction::PromoteMember, "u2")
        .await?;
    assert!(service
        .get_by_id(&group.id)
        .await?
        .unwrap()
        .admins
        .contains("u2"));

    service
        .apply_membership(&group.id, MembershipAction::DemoteMember, "u2")
        .await?;
    assert!(!service
        .get_by_id(&group.id)
        .await?
        .unwrap()
        .admins
        .contains("u2"));

    service
        .apply_membership(&group.id, MembershipAction::PromoteMember, "u2")
        .await?;
    service
        .apply_membership(&group.id, MembershipAction::RemoveMember, "u2")
        .await?;
    let stored = service.get_by_id(&group.id).await?.unwrap();

    assert!(!stored.members.contains("u2"));
    assert!(!stored.admins.contains("u2"));

    Ok(())
}

/// Tests acting on a group that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db)
        .apply_membership("missing", MembershipAction::RequestJoin, "u1")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
