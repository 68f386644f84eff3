use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        football_match::{CreateMatchDto, MatchDto, UpdateMatchDto},
    },
    server::{
        controller::GroupFilter,
        error::AppError,
        model::football_match::{CreateMatchParams, UpdateMatchParams},
        service::football_match::MatchService,
        state::AppState,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

/// List matches, newest first.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(
        ("groupId" = Option<String>, Query, description = "Only matches of this group")
    ),
    responses(
        (status = 200, description = "Matches ordered by date and time, newest first", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db, &state.match_locks)
        .get_all(filter.group_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(matches.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a match.
///
/// A match created with `finished: true` is settled right away: field rent and the
/// subscriber and per-match income transactions are derived from its rosters.
///
/// # Returns
/// - `201 Created` - The stored match
/// - `500 Internal Server Error` - Database error while storing the match
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Successfully created match", body = MatchDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let game = MatchService::new(&state.db, &state.match_locks)
        .create(CreateMatchParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match MatchService::new(&state.db, &state.match_locks)
        .get_by_id(&id)
        .await?
    {
        Some(game) => Ok((StatusCode::OK, Json(game.into_dto()))),
        None => Err(AppError::NotFound(format!("Match {} not found", id))),
    }
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match id")
    ),
    request_body = CreateMatchDto,
    responses(
        (status = 200, description = "Successfully replaced match", body = MatchDto),
        (status = 201, description = "Successfully created match", body = MatchDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let (game, created) = MatchService::new(&state.db, &state.match_locks)
        .upsert(&id, CreateMatchParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(game.into_dto())))
}

/// Partially update a match.
///
/// Any update that leaves the match finished re-settles it, so roster or payment
/// corrections after the game are reflected in the ledger.
#[utoipa::path(
    patch,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match id")
    ),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Successfully updated match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let game = MatchService::new(&state.db, &state.match_locks)
        .update(&id, UpdateMatchParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a match.
///
/// Transactions derived from the match are kept as ledger history.
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match id")
    ),
    responses(
        (status = 204, description = "Successfully deleted match"),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    MatchService::new(&state.db, &state.match_locks)
        .delete(&id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Finish a match and settle it.
///
/// The body may carry the final rosters, teams and score; every field is optional.
/// Settlement problems are logged and never fail the request.
///
/// # Returns
/// - `200 OK` - The finished match
/// - `404 Not Found` - No match with this id
/// - `500 Internal Server Error` - Database error while storing the match
#[utoipa::path(
    post,
    path = "/api/matches/{id}/finalize",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match id")
    ),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match finished and settled", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finalize_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<UpdateMatchDto>>,
) -> Result<impl IntoResponse, AppError> {
    let params = payload
        .map(|Json(dto)| UpdateMatchParams::from_dto(dto))
        .unwrap_or_default();

    let game = MatchService::new(&state.db, &state.match_locks)
        .finalize(&id, params)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Mark a finished match as not finished.
///
/// Derived transactions stay in place until the match is finished again.
#[utoipa::path(
    post,
    path = "/api/matches/{id}/reopen",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match id")
    ),
    responses(
        (status = 200, description = "Match reopened", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reopen_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let game = MatchService::new(&state.db, &state.match_locks)
        .reopen(&id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}
