//! # Change long-poll
//!
//! `GET /api/changes?since=<revision>` holds the request open until the
//! store moves past `since` or the timeout elapses. Clients refetch the
//! dashboard whenever `changed` is true.

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::debug;

use super::mappers::BudgetMapper;
use super::ApiQuery;
use crate::AppState;

pub const DEFAULT_WAIT_MS: u64 = 25_000;
pub const MAX_WAIT_MS: u64 = 60_000;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeParams {
    /// Last revision the client has seen; defaults to the current one
    pub since: Option<u64>,
    pub timeout_ms: Option<u64>,
}

pub async fn wait_for_changes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ChangeParams>,
) -> impl IntoResponse {
    let since = params
        .since
        .unwrap_or_else(|| state.dashboard_service.current_revision());
    let timeout = Duration::from_millis(params.timeout_ms.unwrap_or(DEFAULT_WAIT_MS).min(MAX_WAIT_MS));
    debug!("GET /api/changes - since {} for up to {:?}", since, timeout);

    let notice = state.dashboard_service.wait_for_change(since, timeout).await;
    let notification = BudgetMapper::to_change_notification(notice, state.dashboard_service.current_revision());
    (StatusCode::OK, Json(notification))
}
