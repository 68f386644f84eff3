use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilter {
    pub group_id: Option<String>,
    pub match_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(
        ("groupId" = Option<String>, Query, description = "Only comments of this group"),
        ("matchId" = Option<String>, Query, description = "Only comments on this match")
    ),
    responses(
        (status = 200, description = "Comments, oldest first", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Query(filter): Query<CommentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_all(filter.group_id.as_deref(), filter.match_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Post a comment on a match; `parentId` makes it a reply.
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match CommentService::new(&state.db).get_by_id(&id).await? {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(AppError::NotFound(format!("Comment {} not found", id))),
    }
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Comment id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Successfully edited comment", body = CommentDto),
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let (comment, created) = CommentService::new(&state.db)
        .upsert(&id, CreateCommentParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(comment.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .update(&id, UpdateCommentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
