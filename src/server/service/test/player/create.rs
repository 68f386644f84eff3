use super::*;

/// Tests that a formatted phone is stored as digits and links the account.
///
/// Expected: phone and userId both "11987654321"
#[tokio::test]
async fn normalizes_phone_and_links_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerService::new(db)
        .create(params("p1", "(11) 98765-4321"))
        .await?;

    assert_eq!(player.phone, "11987654321");
    assert_eq!(player.user_id.as_deref(), Some("11987654321"));

    Ok(())
}

/// Tests rejecting a phone with fewer than ten digits.
///
/// Expected: Err(ValidationError::InvalidPhone)
#[tokio::test]
async fn rejects_short_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerService::new(db).create(params("p1", "98765-43")).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidPhone))
    ));

    Ok(())
}

/// Tests rejecting a phone already used by another player.
///
/// Expected: Err(ValidationError::PhoneTaken)
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_player(db, "g1").await?;

    let result = PlayerService::new(db)
        .create(params("p2", &existing.phone))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::PhoneTaken))
    ));

    Ok(())
}

/// Tests that guests are never stored as monthly subscribers.
///
/// Expected: is_monthly_subscriber false
#[tokio::test]
async fn guest_is_not_subscriber() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut guest = params("p1", "11987654321");
    guest.is_guest = true;
    guest.is_monthly_subscriber = true;

    let player = PlayerService::new(db).create(guest).await?;

    assert!(player.is_guest);
    assert!(!player.is_monthly_subscriber);

    Ok(())
}
