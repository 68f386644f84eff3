use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        group::{CreateGroupDto, GroupDto, MembershipDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        model::group::{CreateGroupParams, MembershipAction, UpdateGroupParams},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub user_id: Option<String>,
}

/// List every group.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the groups a user owns or is a member of.
///
/// Pending join requests do not count as membership. A missing `userId` yields an
/// empty list.
#[utoipa::path(
    get,
    path = "/api/groups/by_user",
    tag = GROUP_TAG,
    params(
        ("userId" = Option<String>, Query, description = "Account id of the user")
    ),
    responses(
        (status = 200, description = "Groups of the user", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups_by_user(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db)
        .get_by_user(filter.user_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a group.
///
/// The owner is added to the admins, and an invite code is generated when the body
/// does not carry one.
///
/// # Returns
/// - `201 Created` - The stored group
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .create(CreateGroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match GroupService::new(&state.db).get_by_id(&id).await? {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(AppError::NotFound(format!("Group {} not found", id))),
    }
}

/// Replace a group, creating it under the path id when absent.
///
/// # Returns
/// - `201 Created` - No group existed under `id`
/// - `200 OK` - The existing group was replaced
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group id")
    ),
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Successfully replaced group", body = GroupDto),
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let (group, created) = GroupService::new(&state.db)
        .upsert(&id, CreateGroupParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(group.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group id")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .update(&id, UpdateGroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group id")
    ),
    responses(
        (status = 204, description = "Successfully deleted group"),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply a membership action to a group.
///
/// `action` is one of `request_join`, `approve_request`, `reject_request`,
/// `cancel_request`, `remove_member`, `promote_member` or `demote_member`.
/// Demoting the owner is refused with status `ignored`.
///
/// # Returns
/// - `200 OK` - `{"status": "ok"}` or `{"status": "ignored"}`
/// - `400 Bad Request` - Missing `userId`
/// - `404 Not Found` - Unknown group or action
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups/{id}/{action}",
    tag = GROUP_TAG,
    params(
        ("id" = String, Path, description = "Group id"),
        ("action" = String, Path, description = "Membership action")
    ),
    request_body = MembershipDto,
    responses(
        (status = 200, description = "Action processed", body = StatusDto),
        (status = 400, description = "Missing user id", body = ErrorDto),
        (status = 404, description = "Group or action not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_membership(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, String)>,
    Json(payload): Json<MembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let action = MembershipAction::from_path(&action)
        .ok_or_else(|| AppError::NotFound(format!("Unknown group action {}", action)))?;

    let outcome = GroupService::new(&state.db)
        .apply_membership(&id, action, &payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(StatusDto::new(outcome.as_status()))))
}
