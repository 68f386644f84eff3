//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a field and a match played on it with the given roster.
///
/// Every id in `confirmed` is also marked as paid unless `paid` is provided.
/// Players are not created; use the player factory for ids that should resolve.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_id` - Group the field and match belong to
/// - `hourly_rate` - Field rental rate
/// - `confirmed` - Confirmed player ids
/// - `paid` - Paid player ids
///
/// # Returns
/// - `Ok((field, match))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_field(
    db: &DatabaseConnection,
    group_id: &str,
    hourly_rate: f64,
    confirmed: Vec<String>,
    paid: Vec<String>,
) -> Result<(entity::field::Model, entity::football_match::Model), DbErr> {
    let field = crate::factory::field::FieldFactory::new(db, group_id)
        .hourly_rate(hourly_rate)
        .build()
        .await?;
    let game = crate::factory::football_match::MatchFactory::new(db, group_id, &field.id)
        .confirmed(confirmed)
        .paid(paid)
        .build()
        .await?;

    Ok((field, game))
}

/// Creates `count` players in a group with the given subscription flag.
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created players in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_players(
    db: &DatabaseConnection,
    group_id: &str,
    count: usize,
    monthly_subscriber: bool,
) -> Result<Vec<entity::player::Model>, DbErr> {
    let mut players = Vec::with_capacity(count);
    for _ in 0..count {
        players.push(
            crate::factory::player::PlayerFactory::new(db, group_id)
                .monthly_subscriber(monthly_subscriber)
                .build()
                .await?,
        );
    }

    Ok(players)
}
