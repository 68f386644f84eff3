use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        transaction::{
            CreateTransactionDto, TransactionDto, UpdateTransactionDto, UpsertMatchRevenueDto,
        },
    },
    server::{
        controller::GroupFilter,
        error::AppError,
        model::transaction::{
            CreateTransactionParams, UpdateTransactionParams, UpsertMatchRevenueParams,
        },
        service::transaction::TransactionService,
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    params(
        ("groupId" = Option<String>, Query, description = "Only transactions of this group")
    ),
    responses(
        (status = 200, description = "Transactions", body = Vec<TransactionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    Query(filter): Query<GroupFilter>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = TransactionService::new(&state.db)
        .get_all(filter.group_id.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            transactions
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Successfully created transaction", body = TransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = TransactionService::new(&state.db)
        .create(CreateTransactionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Record the total revenue of a match as a single income transaction.
///
/// The first transaction linked to the match is updated in place, or `tx_<matchId>`
/// is created. A total of zero or less removes the row instead.
///
/// This entry is independent of settlement; settling the match later removes it.
///
/// # Returns
/// - `200 OK` - The revenue transaction, or `{"status": "deleted"}`
/// - `400 Bad Request` - Invalid amount
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/transactions/upsert_match",
    tag = TRANSACTION_TAG,
    request_body = UpsertMatchRevenueDto,
    responses(
        (status = 200, description = "Revenue transaction stored, or `{\"status\": \"deleted\"}` when removed", body = TransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_match_revenue(
    State(state): State<AppState>,
    Json(payload): Json<UpsertMatchRevenueDto>,
) -> Result<Response, AppError> {
    let transaction = TransactionService::new(&state.db)
        .upsert_match_revenue(UpsertMatchRevenueParams::from_dto(payload))
        .await?;

    Ok(match transaction {
        Some(transaction) => (StatusCode::OK, Json(transaction.into_dto())).into_response(),
        None => (StatusCode::OK, Json(StatusDto::new("deleted"))).into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(
        ("id" = String, Path, description = "Transaction id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved transaction", body = TransactionDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match TransactionService::new(&state.db).get_by_id(&id).await? {
        Some(transaction) => Ok((StatusCode::OK, Json(transaction.into_dto()))),
        None => Err(AppError::NotFound(format!("Transaction {} not found", id))),
    }
}

#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(
        ("id" = String, Path, description = "Transaction id")
    ),
    request_body = CreateTransactionDto,
    responses(
        (status = 200, description = "Successfully replaced transaction", body = TransactionDto),
        (status = 201, description = "Successfully created transaction", body = TransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let (transaction, created) = TransactionService::new(&state.db)
        .upsert(&id, CreateTransactionParams::from_dto(payload))
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(transaction.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(
        ("id" = String, Path, description = "Transaction id")
    ),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Successfully updated transaction", body = TransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = TransactionService::new(&state.db)
        .update(&id, UpdateTransactionParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = TRANSACTION_TAG,
    params(
        ("id" = String, Path, description = "Transaction id")
    ),
    responses(
        (status = 204, description = "Successfully deleted transaction"),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    TransactionService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
