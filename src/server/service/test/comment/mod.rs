use crate::server::{
    error::AppError, model::comment::CreateCommentParams, service::comment::CommentService,
};
use test_utils::{builder::TestBuilder, factory};


fn params(id: &str, match_id: &str, content: &str) -> CreateCommentParams {
    CreateCommentParams {
        id: id.to_string(),
        group_id: "g1".to_string(),
        match_id: match_id.to_string(),
        parent_id: None,
        author_player_id: "p1".to_string(),
        content: content.to_string(),
        created_at: "2025-10-18T22:00:00Z".to_string(),
    }
}
