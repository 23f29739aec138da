//! # Budget Tracker Backend
//!
//! Contains all non-UI logic for the budget tracker.
//!
//! This crate brings together:
//! - **Domain**: the budget rules and derived figures
//! - **Storage**: a file-backed document store (CSV collections plus a YAML
//!   settings document) with a change feed
//! - **IO**: the REST API the browser UI talks to
//!
//! ## Architecture
//!
//! ```text
//! UI (browser)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, budget calculator)
//!     ↓
//! Storage Layer (CSV/YAML files, change feed)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    BalanceService, BudgetSettingsService, CategoryService, DashboardService, DebitOrderService,
    TransactionService,
};
use crate::io::rest::{
    budget_apis, category_apis, change_apis, debit_order_apis, health_apis, summary_apis,
    transaction_apis,
};
use crate::storage::csv::CsvConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService<CsvConnection>,
    pub category_service: CategoryService<CsvConnection>,
    pub debit_order_service: DebitOrderService<CsvConnection>,
    pub budget_settings_service: BudgetSettingsService<CsvConnection>,
    pub balance_service: BalanceService<CsvConnection>,
    pub dashboard_service: DashboardService<CsvConnection>,
}

impl AppState {
    pub fn new(connection: &CsvConnection) -> Self {
        Self {
            transaction_service: TransactionService::new(connection),
            category_service: CategoryService::new(connection),
            debit_order_service: DebitOrderService::new(connection),
            budget_settings_service: BudgetSettingsService::new(connection),
            balance_service: BalanceService::new(connection),
            dashboard_service: DashboardService::new(connection),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    let data_directory = config.data_directory();
    info!("Opening data directory {}", data_directory.display());
    let connection = CsvConnection::new(&data_directory)?;

    info!("Setting up application state");
    Ok(AppState::new(&connection))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/transactions",
            get(transaction_apis::list_transactions).post(transaction_apis::create_transaction),
        )
        .route("/transactions/:id", delete(transaction_apis::delete_transaction))
        .route(
            "/categories",
            get(category_apis::list_categories).post(category_apis::create_category),
        )
        .route("/categories/:id", delete(category_apis::delete_category))
        .route(
            "/debit-orders",
            get(debit_order_apis::list_debit_orders).post(debit_order_apis::create_debit_order),
        )
        .route("/debit-orders/upcoming", get(debit_order_apis::upcoming_debit_orders))
        .route("/debit-orders/:id", delete(debit_order_apis::delete_debit_order))
        .route(
            "/budget/main-income",
            get(budget_apis::get_main_income).put(budget_apis::set_main_income),
        )
        .route("/summary", get(summary_apis::get_budget_summary))
        .route("/summary/categories", get(summary_apis::get_spending_breakdown))
        .route("/summary/stats", get(summary_apis::get_transaction_stats))
        .route("/dashboard", get(summary_apis::get_dashboard))
        .route("/changes", get(change_apis::wait_for_changes))
        .route("/health", get(health_apis::health));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
