use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, UpdateByUserDto, UpdatePlayerDto, UpdatedCountDto},
    },
    server::{
        controller::GroupFilter,
        error::AppError,
        model::player::{CreatePlayerParams, PlayerProfile, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(
        ("groupId" = Option<String>, Query, description = "Only players of this group")
    ),
    responses(
        (status = 200, description = "Players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db)
        .get_all(filter.group_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(players.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a player.
///
/// The phone is reduced to its digits, must have at least ten of them and must not
/// belong to another player. The digits also become the player's `userId`.
///
/// # Returns
/// - `201 Created` - The stored player
/// - `400 Bad Request` - Invalid or duplicate phone
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid or duplicate phone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .create(CreatePlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// Copy account profile fields to every player linked to a user.
///
/// # Returns
/// - `200 OK` - `{"updated": n}` with the number of players changed
/// - `400 Bad Request` - Invalid or duplicate phone in the profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players/update_by_user",
    tag = PLAYER_TAG,
    request_body = UpdateByUserDto,
    responses(
        (status = 200, description = "Number of players updated", body = UpdatedCountDto),
        (status = 400, description = "Invalid or duplicate phone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_players_by_user(
    State(state): State<AppState>,
    Json(payload): Json<UpdateByUserDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.user_id.is_empty() {
        return Err(AppError::BadRequest("userId is required".to_string()));
    }

    let updated = PlayerService::new(&state.db)
        .update_by_user(&payload.user_id, PlayerProfile::from_dto(payload.user_data))
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCountDto { updated })))
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Player id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match PlayerService::new(&state.db).get_by_id(&id).await? {
        Some(player) => Ok((StatusCode::OK, Json(player.into_dto()))),
        None => Err(AppError::NotFound(format!("Player {} not found", id))),
    }
}

#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Player id")
    ),
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "Successfully replaced player", body = PlayerDto),
        (status = 201, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid or duplicate phone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let (player, created) = PlayerService::new(&state.db)
        .upsert(&id, CreatePlayerParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(player.into_dto())))
}

/// Partially update a player.
///
/// A new phone is validated like on create and relinks the player's `userId`.
#[utoipa::path(
    patch,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Player id")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid or duplicate phone", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db)
        .update(&id, UpdatePlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Player id")
    ),
    responses(
        (status = 204, description = "Successfully deleted player"),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    PlayerService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
