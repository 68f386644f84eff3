use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub group_id: String,
    pub match_id: String,
    pub parent_id: Option<String>,
    pub author_player_id: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub id: Option<String>,
    pub group_id: String,
    pub match_id: String,
    pub parent_id: Option<String>,
    pub author_player_id: String,
    pub content: String,
    pub created_at: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentDto {
    pub content: Option<String>,
    pub parent_id: Option<Option<String>>,
}
