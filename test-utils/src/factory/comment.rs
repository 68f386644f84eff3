//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    group_id: String,
    match_id: String,
    parent_id: Option<String>,
    author_player_id: String,
    content: String,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    pub fn new(
        db: &'a DatabaseConnection,
        group_id: impl Into<String>,
        match_id: impl Into<String>,
        author_player_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("comment_{}", id),
            group_id: group_id.into(),
            match_id: match_id.into(),
            parent_id: None,
            author_player_id: author_player_id.into(),
            content: format!("Comment {}", id),
        }
    }

    pub fn parent_id(mut self, parent_id: Option<String>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(self.id),
            group_id: ActiveValue::Set(self.group_id),
            match_id: ActiveValue::Set(self.match_id),
            parent_id: ActiveValue::Set(self.parent_id),
            author_player_id: ActiveValue::Set(self.author_player_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(Utc::now().to_rfc3339()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment with default content.
pub async fn create_comment(
    db: &DatabaseConnection,
    group_id: impl Into<String>,
    match_id: impl Into<String>,
    author_player_id: impl Into<String>,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, group_id, match_id, author_player_id)
        .build()
        .await
}
