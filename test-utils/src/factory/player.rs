//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db, "group_1")
///     .monthly_subscriber(true)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    group_id: String,
    user_id: Option<String>,
    nickname: String,
    phone: String,
    is_monthly_subscriber: bool,
    is_guest: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - id: `"player_{id}"`
    /// - phone: eleven digits derived from the counter, unique per test run
    /// - user_id: same as the phone
    /// - is_monthly_subscriber / is_guest: `false`
    pub fn new(db: &'a DatabaseConnection, group_id: impl Into<String>) -> Self {
        let id = next_id();
        let phone = format!("119{:08}", id);
        Self {
            db,
            id: format!("player_{}", id),
            group_id: group_id.into(),
            user_id: Some(phone.clone()),
            nickname: format!("Player {}", id),
            phone,
            is_monthly_subscriber: false,
            is_guest: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn monthly_subscriber(mut self, is_monthly_subscriber: bool) -> Self {
        self.is_monthly_subscriber = is_monthly_subscriber;
        self
    }

    pub fn guest(mut self, is_guest: bool) -> Self {
        self.is_guest = is_guest;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::Set(self.id),
            group_id: ActiveValue::Set(self.group_id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(format!("{} Silva", self.nickname)),
            nickname: ActiveValue::Set(self.nickname),
            birth_date: ActiveValue::Set("1990-01-01".to_string()),
            email: ActiveValue::Set("player@example.com".to_string()),
            phone: ActiveValue::Set(self.phone),
            favorite_team: ActiveValue::Set("Corinthians".to_string()),
            position: ActiveValue::Set("Meio-campo".to_string()),
            rating: ActiveValue::Set(3.0),
            matches_played: ActiveValue::Set(0),
            avatar: ActiveValue::Set(None),
            is_monthly_subscriber: ActiveValue::Set(self.is_monthly_subscriber),
            monthly_start_month: ActiveValue::Set(None),
            is_guest: ActiveValue::Set(self.is_guest),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-subscriber player with default values.
pub async fn create_player(
    db: &DatabaseConnection,
    group_id: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, group_id).build().await
}
