//! # REST API for the Main Income setting

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::UpdateMainIncomeRequest;
use tracing::{info, warn};

use super::mappers::BudgetMapper;
use super::{ApiError, ApiJson};
use crate::AppState;

pub async fn get_main_income(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/budget/main-income");

    match state.budget_settings_service.get_main_income().await {
        Ok(main_income) => (StatusCode::OK, Json(BudgetMapper::to_main_income_dto(main_income))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn set_main_income(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdateMainIncomeRequest>,
) -> impl IntoResponse {
    info!("PUT /api/budget/main-income - request: {:?}", request);

    match state.budget_settings_service.set_main_income(request.amount).await {
        Ok(main_income) => {
            (StatusCode::OK, Json(BudgetMapper::to_main_income_dto(Some(main_income)))).into_response()
        }
        Err(e) => {
            warn!("Failed to set main income: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_set_main_income_handler() {
        let env = TestEnvironment::new().await.unwrap();
        let state = AppState::new(&env.connection);

        let response = set_main_income(State(state.clone()), ApiJson(UpdateMainIncomeRequest { amount: -1.0 })).await;
        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);

        let response = set_main_income(State(state.clone()), ApiJson(UpdateMainIncomeRequest { amount: 20_000.0 })).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);
        assert_eq!(state.budget_settings_service.monthly_income().await.unwrap(), 20_000.0);
    }
}
