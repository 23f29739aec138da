//! # REST API for Debit Orders

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Deserialize;
use shared::{CreateDebitOrderRequest, DebitOrder, DeleteResponse};
use tracing::{info, warn};

use super::mappers::DebitOrderMapper;
use super::query::parse_date;
use super::{ApiError, ApiJson, ApiQuery};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UpcomingParams {
    /// Compute the schedule from this day (YYYY-MM-DD), default today
    pub date: Option<String>,
}

pub async fn list_debit_orders(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/debit-orders");

    match state.debit_order_service.list_debit_orders().await {
        Ok(debit_orders) => {
            let debit_orders: Vec<DebitOrder> = debit_orders.into_iter().map(DebitOrderMapper::to_dto).collect();
            (StatusCode::OK, Json(debit_orders)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn create_debit_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateDebitOrderRequest>,
) -> impl IntoResponse {
    info!("POST /api/debit-orders - request: {:?}", request);

    match state
        .debit_order_service
        .create_debit_order(DebitOrderMapper::to_create_command(request))
        .await
    {
        Ok(debit_order) => (StatusCode::CREATED, Json(DebitOrderMapper::to_dto(debit_order))).into_response(),
        Err(e) => {
            warn!("Failed to create debit order: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn delete_debit_order(
    State(state): State<AppState>,
    Path(debit_order_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/debit-orders/{}", debit_order_id);

    match state.debit_order_service.delete_debit_order(&debit_order_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success_message: "Debit order deleted".to_string(),
                deleted_id: debit_order_id,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to delete debit order {}: {}", debit_order_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Next occurrence of every debit order, soonest first
pub async fn upcoming_debit_orders(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UpcomingParams>,
) -> impl IntoResponse {
    info!("GET /api/debit-orders/upcoming - query: {:?}", params);

    let from_date = match parse_date(params.date.as_deref()) {
        Ok(date) => date.unwrap_or_else(|| Utc::now().date_naive()),
        Err(e) => return e.into_response(),
    };

    match state.debit_order_service.upcoming_debit_orders(from_date).await {
        Ok(upcoming) => (
            StatusCode::OK,
            Json(DebitOrderMapper::to_upcoming_response(from_date, upcoming)),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
