//! # CSV Storage
//!
//! File-backed implementation of the storage traits. Each collection lives in
//! one CSV file at the root of the data directory; the singleton budget
//! settings document is YAML.

pub mod budget_settings_repository;
pub mod category_repository;
pub mod connection;
pub mod debit_order_repository;
pub mod transaction_repository;

#[cfg(test)]
pub mod test_utils;

pub use budget_settings_repository::BudgetSettingsRepository;
pub use category_repository::CategoryRepository;
pub use connection::CsvConnection;
pub use debit_order_repository::DebitOrderRepository;
pub use transaction_repository::TransactionRepository;
