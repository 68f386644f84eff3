use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        field::{CreateFieldDto, FieldDto, UpdateFieldDto},
    },
    server::{
        controller::GroupFilter,
        error::AppError,
        model::field::{CreateFieldParams, UpdateFieldParams},
        service::field::FieldService,
        state::AppState,
    },
};

/// Tag for grouping field endpoints in OpenAPI documentation
pub static FIELD_TAG: &str = "field";

#[utoipa::path(
    get,
    path = "/api/fields",
    tag = FIELD_TAG,
    params(
        ("groupId" = Option<String>, Query, description = "Only fields of this group")
    ),
    responses(
        (status = 200, description = "Fields", body = Vec<FieldDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fields(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> Result<impl IntoResponse, AppError> {
    let fields = FieldService::new(&state.db)
        .get_all(filter.group_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(fields.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/fields",
    tag = FIELD_TAG,
    request_body = CreateFieldDto,
    responses(
        (status = 201, description = "Successfully created field", body = FieldDto),
        (status = 400, description = "Negative hourly rate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_field(
    State(state): State<AppState>,
    Json(payload): Json<CreateFieldDto>,
) -> Result<impl IntoResponse, AppError> {
    let field = FieldService::new(&state.db)
        .create(CreateFieldParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(field.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/fields/{id}",
    tag = FIELD_TAG,
    params(
        ("id" = String, Path, description = "Field id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved field", body = FieldDto),
        (status = 404, description = "Field not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match FieldService::new(&state.db).get_by_id(&id).await? {
        Some(field) => Ok((StatusCode::OK, Json(field.into_dto()))),
        None => Err(AppError::NotFound(format!("Field {} not found", id))),
    }
}

#[utoipa::path(
    put,
    path = "/api/fields/{id}",
    tag = FIELD_TAG,
    params(
        ("id" = String, Path, description = "Field id")
    ),
    request_body = CreateFieldDto,
    responses(
        (status = 200, description = "Successfully replaced field", body = FieldDto),
        (status = 201, description = "Successfully created field", body = FieldDto),
        (status = 400, description = "Negative hourly rate", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateFieldDto>,
) -> Result<impl IntoResponse, AppError> {
    let (field, created) = FieldService::new(&state.db)
        .upsert(&id, CreateFieldParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(field.into_dto())))
}

/// Partially update a field.
///
/// Changing `hourlyRate` does not touch existing transactions; matches on this field
/// pick up the new rate the next time they are settled.
#[utoipa::path(
    patch,
    path = "/api/fields/{id}",
    tag = FIELD_TAG,
    params(
        ("id" = String, Path, description = "Field id")
    ),
    request_body = UpdateFieldDto,
    responses(
        (status = 200, description = "Successfully updated field", body = FieldDto),
        (status = 400, description = "Negative hourly rate", body = ErrorDto),
        (status = 404, description = "Field not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateFieldDto>,
) -> Result<impl IntoResponse, AppError> {
    let field = FieldService::new(&state.db)
        .update(&id, UpdateFieldParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(field.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/fields/{id}",
    tag = FIELD_TAG,
    params(
        ("id" = String, Path, description = "Field id")
    ),
    responses(
        (status = 204, description = "Successfully deleted field"),
        (status = 404, description = "Field not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    FieldService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
