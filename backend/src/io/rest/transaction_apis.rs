//! # REST API for Transactions
//!
//! Endpoints for listing, recording and deleting income and expense
//! transactions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use shared::{CreateTransactionRequest, DeleteResponse};
use tracing::{info, warn};

use super::mappers::TransactionMapper;
use super::query::{parse_month, parse_transaction_type};
use super::{ApiError, ApiJson, ApiQuery};
use crate::AppState;

// Query parameters for transaction listing API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListParams {
    pub month: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

/// List transactions, newest first, with optional filtering and pagination
pub async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TransactionListParams>,
) -> impl IntoResponse {
    info!("GET /api/transactions - query: {:?}", params);

    let month = match parse_month(params.month.as_deref()) {
        Ok(month) => month,
        Err(e) => return e.into_response(),
    };
    let transaction_type = match parse_transaction_type(params.transaction_type.as_deref()) {
        Ok(transaction_type) => transaction_type,
        Err(e) => return e.into_response(),
    };
    let query = TransactionMapper::to_list_query(month, transaction_type, params.after, params.limit);

    match state.transaction_service.list_transactions(query).await {
        Ok(result) => (StatusCode::OK, Json(TransactionMapper::to_list_response(result))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Record a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTransactionRequest>,
) -> impl IntoResponse {
    info!("POST /api/transactions - request: {:?}", request);

    let command = TransactionMapper::to_create_command(request);
    match state.transaction_service.create_transaction(command).await {
        Ok(transaction) => (StatusCode::CREATED, Json(TransactionMapper::to_dto(transaction))).into_response(),
        Err(e) => {
            warn!("Failed to create transaction: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Delete a single transaction
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/transactions/{}", transaction_id);

    match state.transaction_service.delete_transaction(&transaction_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success_message: "Transaction deleted".to_string(),
                deleted_id: transaction_id,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to delete transaction {}: {}", transaction_id, e);
            ApiError::from(e).into_response()
        }
    }
}
