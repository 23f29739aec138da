//! Dashboard snapshots and change waiting.
//!
//! A client loads one snapshot, remembers its revision, then waits on the
//! change feed for anything newer and reloads. That replaces per-collection
//! live listeners with a single ordered stream of revisions.
use std::time::Duration;

use super::budget_calculator;
use super::budget_settings_service::BudgetSettingsService;
use super::category_service::CategoryService;
use super::debit_order_service::DebitOrderService;
use super::errors::DomainResult;
use super::models::{Category, DebitOrder, MainIncome, Transaction};
use super::transaction_service::TransactionService;
use crate::storage::{ChangeFeed, ChangeNotice, Connection};
use shared::BudgetSummary;

/// Everything the main screen shows, read at one revision
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub revision: u64,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub debit_orders: Vec<DebitOrder>,
    pub main_income: Option<MainIncome>,
    pub summary: BudgetSummary,
}

#[derive(Clone)]
pub struct DashboardService<C: Connection> {
    transaction_service: TransactionService<C>,
    category_service: CategoryService<C>,
    debit_order_service: DebitOrderService<C>,
    budget_settings_service: BudgetSettingsService<C>,
    change_feed: ChangeFeed,
}

impl<C: Connection> DashboardService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            transaction_service: TransactionService::new(connection),
            category_service: CategoryService::new(connection),
            debit_order_service: DebitOrderService::new(connection),
            budget_settings_service: BudgetSettingsService::new(connection),
            change_feed: connection.change_feed().clone(),
        }
    }

    pub fn current_revision(&self) -> u64 {
        self.change_feed.revision()
    }

    /// Load every collection.
    ///
    /// The revision is read before loading, so a write that lands mid-load
    /// is reported as newer and the client fetches again. The summary is
    /// computed from the lists returned here, never from a second read.
    pub async fn snapshot(&self) -> DomainResult<Dashboard> {
        let revision = self.change_feed.revision();

        let transactions = self.transaction_service.recent_transactions(None).await?;
        let categories = self.category_service.list_categories(None).await?;
        let debit_orders = self.debit_order_service.list_debit_orders().await?;
        let main_income = self.budget_settings_service.get_main_income().await?;

        let monthly_income = main_income.as_ref().map(|income| income.amount).unwrap_or(0.0);
        let summary = budget_calculator::budget_summary(monthly_income, &debit_orders, &transactions, None);

        Ok(Dashboard {
            revision,
            transactions,
            categories,
            debit_orders,
            main_income,
            summary,
        })
    }

    pub async fn wait_for_change(&self, since: u64, timeout: Duration) -> Option<ChangeNotice> {
        self.change_feed.wait_for_change(since, timeout).await
    }
}
