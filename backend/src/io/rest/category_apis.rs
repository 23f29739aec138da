//! # REST API for Categories

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use shared::{Category, CreateCategoryRequest, DeleteResponse};
use tracing::{info, warn};

use super::mappers::CategoryMapper;
use super::query::parse_transaction_type;
use super::{ApiError, ApiJson, ApiQuery};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryListParams {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// List categories, optionally only income or only expense ones
pub async fn list_categories(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CategoryListParams>,
) -> impl IntoResponse {
    info!("GET /api/categories - query: {:?}", params);

    let category_type = match parse_transaction_type(params.category_type.as_deref()) {
        Ok(category_type) => category_type,
        Err(e) => return e.into_response(),
    };

    match state.category_service.list_categories(category_type).await {
        Ok(categories) => {
            let categories: Vec<Category> = categories.into_iter().map(CategoryMapper::to_dto).collect();
            (StatusCode::OK, Json(categories)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCategoryRequest>,
) -> impl IntoResponse {
    info!("POST /api/categories - request: {:?}", request);

    match state
        .category_service
        .create_category(CategoryMapper::to_create_command(request))
        .await
    {
        Ok(category) => (StatusCode::CREATED, Json(CategoryMapper::to_dto(category))).into_response(),
        Err(e) => {
            warn!("Failed to create category: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Delete a category. Transactions recorded against it keep its name.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/categories/{}", category_id);

    match state.category_service.delete_category(&category_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success_message: "Category deleted".to_string(),
                deleted_id: category_id,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to delete category {}: {}", category_id, e);
            ApiError::from(e).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use shared::TransactionType;

    #[tokio::test]
    async fn test_create_and_delete_category_handlers() {
        let env = TestEnvironment::new().await.unwrap();
        let state = AppState::new(&env.connection);

        let response = create_category(
            State(state.clone()),
            ApiJson(CreateCategoryRequest {
                name: "Groceries".to_string(),
                category_type: TransactionType::Expense,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let categories = state.category_service.list_categories(None).await.unwrap();
        assert_eq!(categories.len(), 1);

        let response = delete_category(State(state.clone()), Path(categories[0].id.clone())).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);

        let response = delete_category(State(state), Path("missing".to_string())).await;
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_categories_rejects_unknown_type() {
        let env = TestEnvironment::new().await.unwrap();
        let state = AppState::new(&env.connection);

        let params = CategoryListParams {
            category_type: Some("savings".to_string()),
        };
        let response = list_categories(State(state), ApiQuery(params)).await;
        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
