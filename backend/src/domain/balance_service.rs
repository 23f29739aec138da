//! Balance service: the derived budget numbers.
//!
//! Nothing here is stored. Every figure is recomputed from the current
//! transactions, debit orders and main income each time it is asked for.
use shared::{BudgetSummary, SpendingBreakdown, TransactionStats};
use tracing::debug;

use super::budget_calculator;
use super::budget_settings_service::BudgetSettingsService;
use super::errors::DomainResult;
use super::models::{Transaction, YearMonth};
use crate::storage::{Connection, DebitOrderStorage, TransactionStorage};

#[derive(Clone)]
pub struct BalanceService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    debit_order_repository: C::DebitOrderRepository,
    budget_settings_service: BudgetSettingsService<C>,
}

impl<C: Connection> BalanceService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            debit_order_repository: connection.create_debit_order_repository(),
            budget_settings_service: BudgetSettingsService::new(connection),
        }
    }

    async fn transactions_in(&self, month: Option<YearMonth>) -> DomainResult<Vec<Transaction>> {
        let transactions = self.transaction_repository.list_transactions().await?;
        Ok(budget_calculator::filter_by_month(transactions, month))
    }

    /// Balance and savings percentage, optionally limited to one month of
    /// transactions. Main income and debit orders are monthly figures and
    /// always count in full.
    pub async fn budget_summary(&self, month: Option<YearMonth>) -> DomainResult<BudgetSummary> {
        let monthly_income = self.budget_settings_service.monthly_income().await?;
        let debit_orders = self.debit_order_repository.list_debit_orders().await?;
        let transactions = self.transactions_in(month).await?;

        let summary = budget_calculator::budget_summary(monthly_income, &debit_orders, &transactions, month);
        debug!(
            "Summary over {} transactions: balance {:.2}, savings {:.1}%",
            summary.transaction_count, summary.balance, summary.savings_percentage
        );
        Ok(summary)
    }

    pub async fn spending_breakdown(&self, month: Option<YearMonth>) -> DomainResult<SpendingBreakdown> {
        let transactions = self.transactions_in(month).await?;
        Ok(budget_calculator::spending_breakdown(&transactions, month))
    }

    pub async fn transaction_stats(&self, month: Option<YearMonth>) -> DomainResult<TransactionStats> {
        let transactions = self.transactions_in(month).await?;
        Ok(budget_calculator::transaction_stats(&transactions, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{period::parse_timestamp, DebitOrder, MainIncome, TransactionType};
    use crate::storage::csv::{test_utils::TestEnvironment, CsvConnection};
    use crate::storage::BudgetSettingsStorage;
    use chrono::Utc;

    struct Fixture {
        service: BalanceService<CsvConnection>,
        env: TestEnvironment,
    }

    async fn create_fixture() -> Fixture {
        let env = TestEnvironment::new().await.unwrap();
        Fixture {
            service: BalanceService::new(&env.connection),
            env,
        }
    }

    async fn store(fixture: &Fixture, id: &str, transaction_type: TransactionType, amount: f64, category: &str, when: &str) {
        let timestamp = parse_timestamp(when).unwrap();
        let transaction = Transaction {
            id: id.to_string(),
            description: id.to_string(),
            amount,
            transaction_type,
            category_id: Some(format!("c-{}", category.to_lowercase())),
            category_name: category.to_string(),
            timestamp,
            created_at: timestamp,
        };
        fixture
            .env
            .connection
            .create_transaction_repository()
            .store_transaction(&transaction)
            .await
            .unwrap();
    }

    async fn seed(fixture: &Fixture) {
        fixture
            .env
            .connection
            .create_budget_settings_repository()
            .set_main_income(&MainIncome { amount: 20_000.0, updated_at: Utc::now() })
            .await
            .unwrap();
        fixture
            .env
            .connection
            .create_debit_order_repository()
            .store_debit_order(&DebitOrder {
                id: "d1".to_string(),
                name: "Gym".to_string(),
                amount: 500.0,
                due_date: 1,
            })
            .await
            .unwrap();

        store(fixture, "t1", TransactionType::Income, 1_000.0, "Freelance", "2025-03-02").await;
        store(fixture, "t2", TransactionType::Expense, 300.0, "Food", "2025-03-05").await;
        store(fixture, "t3", TransactionType::Expense, 200.0, "Food", "2025-03-06").await;
        store(fixture, "t4", TransactionType::Expense, 500.0, "Rent", "2025-03-07").await;
        store(fixture, "t5", TransactionType::Expense, 1_000.0, "Food", "2025-02-20").await;
    }

    #[tokio::test]
    async fn test_empty_store_summary() {
        let fixture = create_fixture().await;
        let summary = fixture.service.budget_summary(None).await.unwrap();
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.savings_percentage, 0.0);
        assert_eq!(summary.transaction_count, 0);
    }

    #[tokio::test]
    async fn test_summary_follows_main_income_setting() {
        let fixture = create_fixture().await;
        let settings = BudgetSettingsService::new(&fixture.env.connection);

        settings.set_main_income(8_000.0).await.unwrap();
        let summary = fixture.service.budget_summary(None).await.unwrap();
        assert_eq!(summary.monthly_income, 8_000.0);
        assert_eq!(summary.balance, 8_000.0);
        assert_eq!(summary.savings_percentage, 100.0);

        settings.set_main_income(0.0).await.unwrap();
        let summary = fixture.service.budget_summary(None).await.unwrap();
        assert_eq!(summary.monthly_income, 0.0);
        assert_eq!(summary.savings_percentage, 0.0);
    }

    #[tokio::test]
    async fn test_budget_summary_all_time() {
        let fixture = create_fixture().await;
        seed(&fixture).await;

        let summary = fixture.service.budget_summary(None).await.unwrap();
        assert_eq!(summary.monthly_income, 20_000.0);
        assert_eq!(summary.total_debit_orders, 500.0);
        assert_eq!(summary.total_income, 1_000.0);
        assert_eq!(summary.total_expenses, 2_000.0);
        assert_eq!(summary.balance, 20_000.0 - 500.0 + 1_000.0 - 2_000.0);
        assert_eq!(summary.savings_percentage, (21_000.0 - 2_000.0) / 21_000.0 * 100.0);
        assert_eq!(summary.transaction_count, 5);
    }

    #[tokio::test]
    async fn test_budget_summary_for_month() {
        let fixture = create_fixture().await;
        seed(&fixture).await;

        let march = YearMonth::new(2025, 3);
        let summary = fixture.service.budget_summary(march).await.unwrap();
        assert_eq!(summary.month.as_deref(), Some("2025-03"));
        assert_eq!(summary.total_expenses, 1_000.0);
        assert_eq!(summary.balance, 20_000.0 - 500.0 + 1_000.0 - 1_000.0);
        assert_eq!(summary.transaction_count, 4);
    }

    #[tokio::test]
    async fn test_spending_breakdown_partitions_expenses() {
        let fixture = create_fixture().await;
        seed(&fixture).await;

        let breakdown = fixture.service.spending_breakdown(YearMonth::new(2025, 3)).await.unwrap();
        assert_eq!(breakdown.total_spent, 1_000.0);
        assert_eq!(breakdown.categories.len(), 2);

        let food = &breakdown.categories[0];
        assert_eq!(food.category_name, "Food");
        assert_eq!(food.total, 500.0);
        assert_eq!(food.transaction_count, 2);
        assert_eq!(food.percentage, 50.0);

        let sum: f64 = breakdown.categories.iter().map(|c| c.total).sum();
        assert_eq!(sum, breakdown.total_spent);
    }

    #[tokio::test]
    async fn test_transaction_stats_averages() {
        let fixture = create_fixture().await;
        seed(&fixture).await;

        let stats = fixture.service.transaction_stats(None).await.unwrap();
        assert_eq!(stats.income_count, 1);
        assert_eq!(stats.expense_count, 4);
        assert_eq!(stats.average_income, 1_000.0);
        assert_eq!(stats.average_expense, 500.0);

        let january = fixture.service.transaction_stats(YearMonth::new(2025, 1)).await.unwrap();
        assert_eq!(january.average_expense, 0.0);
    }
}
