//! Match factory for creating test match entities.

use crate::factory::helpers::next_id;
use entity::id_list::IdList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// Matches are created unfinished by default so that inserting one never
/// implies a settlement has happened.
///
/// # Example
///
/// ```rust,ignore
/// let game = MatchFactory::new(&db, "group_1", &field.id)
///     .confirmed(vec!["p1".into(), "p2".into()])
///     .paid(vec!["p1".into()])
///     .finished(true)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    group_id: String,
    field_id: String,
    date: String,
    confirmed: Vec<String>,
    paid: Vec<String>,
    finished: bool,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - id: `"match_{id}"`
    /// - date: `"2025-10-18"`
    /// - rosters: empty
    /// - finished: `false`
    pub fn new(
        db: &'a DatabaseConnection,
        group_id: impl Into<String>,
        field_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            id: format!("match_{}", next_id()),
            group_id: group_id.into(),
            field_id: field_id.into(),
            date: "2025-10-18".to_string(),
            confirmed: Vec::new(),
            paid: Vec::new(),
            finished: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn confirmed(mut self, confirmed: Vec<String>) -> Self {
        self.confirmed = confirmed;
        self
    }

    pub fn paid(mut self, paid: Vec<String>) -> Self {
        self.paid = paid;
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::football_match::Model, DbErr> {
        entity::football_match::ActiveModel {
            id: ActiveValue::Set(self.id),
            group_id: ActiveValue::Set(self.group_id),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set("20:00".to_string()),
            field_id: ActiveValue::Set(self.field_id),
            confirmed_player_ids: ActiveValue::Set(IdList(self.confirmed)),
            paid_player_ids: ActiveValue::Set(IdList(self.paid)),
            team_a: ActiveValue::Set(serde_json::json!([])),
            team_b: ActiveValue::Set(serde_json::json!([])),
            score_a: ActiveValue::Set(0),
            score_b: ActiveValue::Set(0),
            finished: ActiveValue::Set(self.finished),
            mvp_id: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unfinished match with empty rosters.
pub async fn create_match(
    db: &DatabaseConnection,
    group_id: impl Into<String>,
    field_id: impl Into<String>,
) -> Result<entity::football_match::Model, DbErr> {
    MatchFactory::new(db, group_id, field_id).build().await
}
