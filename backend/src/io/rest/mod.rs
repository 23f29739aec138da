//! # REST API Interface Layer
//!
//! HTTP endpoints for the budget tracker, one file per resource.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: transactions, categories, debit orders, main income,
//!   summaries, the dashboard snapshot and the change long-poll
//! - **Error Handling**: `ApiError` turns domain errors into status codes
//!   with a JSON `{ "error": ... }` body
//! - **Serialization**: camelCase JSON via the `shared` DTOs and `mappers`
//!
//! Handlers hold no business rules; they parse, delegate and map.

pub mod budget_apis;
pub mod category_apis;
pub mod change_apis;
pub mod debit_order_apis;
pub mod error;
pub mod extract;
pub mod health_apis;
pub mod mappers;
pub mod query;
pub mod summary_apis;
pub mod transaction_apis;

pub use error::ApiError;
pub use extract::{ApiJson, ApiQuery};
