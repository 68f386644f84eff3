//! Match comment domain model and parameters.

use crate::{
    model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    server::util::id::id_or_generate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub group_id: String,
    pub match_id: String,
    /// Comment being replied to, if any.
    pub parent_id: Option<String>,
    pub author_player_id: String,
    pub content: String,
    pub created_at: String,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            match_id: entity.match_id,
            parent_id: entity.parent_id,
            author_player_id: entity.author_player_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            group_id: self.group_id,
            match_id: self.match_id,
            parent_id: self.parent_id,
            author_player_id: self.author_player_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub id: String,
    pub group_id: String,
    pub match_id: String,
    pub parent_id: Option<String>,
    pub author_player_id: String,
    pub content: String,
    pub created_at: String,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            id: id_or_generate(dto.id),
            group_id: dto.group_id,
            match_id: dto.match_id,
            parent_id: dto.parent_id,
            author_player_id: dto.author_player_id,
            content: dto.content,
            created_at: dto
                .created_at
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCommentParams {
    pub content: Option<String>,
    pub parent_id: Option<Option<String>>,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Self {
        Self {
            content: dto.content,
            parent_id: dto.parent_id,
        }
    }
}
