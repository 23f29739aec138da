//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Collections behave like a document store: records are created with an id
//! chosen by the caller, read back individually or as a whole collection, and
//! deleted one at a time. There is no update and no referential integrity.

use anyhow::Result;
use async_trait::async_trait;

use super::change_feed::ChangeFeed;
use crate::domain::models::{Category, DebitOrder, MainIncome, Transaction};

#[async_trait]
pub trait TransactionStorage: Send + Sync {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>>;

    /// All stored transactions, in storage order
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Returns true if exactly this transaction was found and removed
    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool>;
}

#[async_trait]
pub trait CategoryStorage: Send + Sync {
    async fn store_category(&self, category: &Category) -> Result<()>;

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Removes the category only; transactions that reference it are untouched
    async fn delete_category(&self, category_id: &str) -> Result<bool>;
}

#[async_trait]
pub trait DebitOrderStorage: Send + Sync {
    async fn store_debit_order(&self, debit_order: &DebitOrder) -> Result<()>;

    async fn list_debit_orders(&self) -> Result<Vec<DebitOrder>>;

    async fn delete_debit_order(&self, debit_order_id: &str) -> Result<bool>;
}

/// The singleton settings document
#[async_trait]
pub trait BudgetSettingsStorage: Send + Sync {
    /// None when the main income has never been set
    async fn get_main_income(&self) -> Result<Option<MainIncome>>;

    async fn set_main_income(&self, main_income: &MainIncome) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, plus access to the change
/// feed every repository publishes on.
pub trait Connection: Send + Sync + Clone + 'static {
    type TransactionRepository: TransactionStorage + Clone + 'static;
    type CategoryRepository: CategoryStorage + Clone + 'static;
    type DebitOrderRepository: DebitOrderStorage + Clone + 'static;
    type BudgetSettingsRepository: BudgetSettingsStorage + Clone + 'static;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;

    fn create_category_repository(&self) -> Self::CategoryRepository;

    fn create_debit_order_repository(&self) -> Self::DebitOrderRepository;

    fn create_budget_settings_repository(&self) -> Self::BudgetSettingsRepository;

    fn change_feed(&self) -> &ChangeFeed;
}
