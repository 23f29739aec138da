//! # Domain Module
//!
//! Business logic for the budget tracker.
//!
//! ## Module Organization
//!
//! - **transaction_service**: recording, listing and deleting transactions
//! - **category_service**: income/expense categories
//! - **debit_order_service**: recurring monthly debit orders and their schedule
//! - **budget_settings_service**: the main monthly income
//! - **balance_service**: summaries, spending breakdowns and statistics
//! - **dashboard_service**: whole-budget snapshots and change waiting
//! - **budget_calculator**: the pure arithmetic the services share
//!
//! ## Business Rules
//!
//! - Amounts are stored positive; the income/expense type carries the sign
//! - A transaction copies its category's name when it is recorded
//! - Deleting a category never touches the transactions that used it
//! - Balance = main income − debit orders + income − expenses

pub mod balance_service;
pub mod budget_calculator;
pub mod budget_settings_service;
pub mod category_service;
pub mod commands;
pub mod dashboard_service;
pub mod debit_order_service;
pub mod errors;
pub mod models;
pub mod transaction_service;
pub mod validation;

pub use balance_service::BalanceService;
pub use budget_settings_service::BudgetSettingsService;
pub use category_service::CategoryService;
pub use dashboard_service::{Dashboard, DashboardService};
pub use debit_order_service::DebitOrderService;
pub use errors::{DomainError, DomainResult};
pub use transaction_service::TransactionService;
