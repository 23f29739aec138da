//! # REST API for derived budget figures
//!
//! Summary, per-category spending and per-type statistics. Each accepts an
//! optional `month=YYYY-MM` to restrict the transactions considered.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::mappers::BudgetMapper;
use super::query::{parse_month, MonthQuery};
use super::{ApiError, ApiQuery};
use crate::AppState;

pub async fn get_budget_summary(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/summary - query: {:?}", query);

    let month = match parse_month(query.month.as_deref()) {
        Ok(month) => month,
        Err(e) => return e.into_response(),
    };
    match state.balance_service.budget_summary(month).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn get_spending_breakdown(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/summary/categories - query: {:?}", query);

    let month = match parse_month(query.month.as_deref()) {
        Ok(month) => month,
        Err(e) => return e.into_response(),
    };
    match state.balance_service.spending_breakdown(month).await {
        Ok(breakdown) => (StatusCode::OK, Json(breakdown)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn get_transaction_stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/summary/stats - query: {:?}", query);

    let month = match parse_month(query.month.as_deref()) {
        Ok(month) => month,
        Err(e) => return e.into_response(),
    };
    match state.balance_service.transaction_stats(month).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Every collection plus the summary, tagged with the change-feed revision
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    match state.dashboard_service.snapshot().await {
        Ok(dashboard) => (StatusCode::OK, Json(BudgetMapper::to_dashboard_dto(dashboard))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
