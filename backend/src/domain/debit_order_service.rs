//! Debit order service domain logic for the budget tracker.
//!
//! Debit orders are fixed monthly commitments. They never appear in the
//! transaction list; their total is subtracted from the balance up front.
use chrono::NaiveDate;
use tracing::info;

use super::budget_calculator;
use super::commands::debit_orders::CreateDebitOrderCommand;
use super::errors::{DomainError, DomainResult};
use super::models::{DebitOrder, UpcomingDebitOrder};
use super::validation::{validate_due_date, validate_positive_amount, validate_text};
use crate::storage::{Connection, DebitOrderStorage};

#[derive(Clone)]
pub struct DebitOrderService<C: Connection> {
    debit_order_repository: C::DebitOrderRepository,
}

impl<C: Connection> DebitOrderService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            debit_order_repository: connection.create_debit_order_repository(),
        }
    }

    pub async fn create_debit_order(&self, command: CreateDebitOrderCommand) -> DomainResult<DebitOrder> {
        let debit_order = DebitOrder {
            id: DebitOrder::generate_id(),
            name: validate_text("debit order name", &command.name)?,
            amount: validate_positive_amount(command.amount)?,
            due_date: validate_due_date(command.due_date)?,
        };
        self.debit_order_repository.store_debit_order(&debit_order).await?;

        info!(
            "Added debit order '{}' for {:.2} due on day {}",
            debit_order.name, debit_order.amount, debit_order.due_date
        );
        Ok(debit_order)
    }

    /// All debit orders in due-date order
    pub async fn list_debit_orders(&self) -> DomainResult<Vec<DebitOrder>> {
        let mut debit_orders = self.debit_order_repository.list_debit_orders().await?;
        debit_orders.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(debit_orders)
    }

    pub async fn delete_debit_order(&self, debit_order_id: &str) -> DomainResult<()> {
        if !self.debit_order_repository.delete_debit_order(debit_order_id).await? {
            return Err(DomainError::not_found("Debit order", debit_order_id));
        }
        info!("Deleted debit order {}", debit_order_id);
        Ok(())
    }

    pub async fn upcoming_debit_orders(&self, today: NaiveDate) -> DomainResult<Vec<UpcomingDebitOrder>> {
        let debit_orders = self.debit_order_repository.list_debit_orders().await?;
        Ok(budget_calculator::upcoming_debit_orders(&debit_orders, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::{test_utils::TestEnvironment, CsvConnection};

    async fn create_test_service() -> (DebitOrderService<CsvConnection>, TestEnvironment) {
        let env = TestEnvironment::new().await.unwrap();
        (DebitOrderService::new(&env.connection), env)
    }

    fn command(name: &str, amount: f64, due_date: u32) -> CreateDebitOrderCommand {
        CreateDebitOrderCommand {
            name: name.to_string(),
            amount,
            due_date,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_sorted_by_due_date() {
        let (service, _env) = create_test_service().await;

        service.create_debit_order(command("Insurance", 600.0, 15)).await.unwrap();
        service.create_debit_order(command(" Gym ", 400.0, 1)).await.unwrap();
        service.create_debit_order(command("Phone", 250.0, 28)).await.unwrap();

        let names: Vec<String> = service
            .list_debit_orders()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Gym", "Insurance", "Phone"]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let (service, _env) = create_test_service().await;

        for bad in [
            command("", 100.0, 1),
            command("Gym", 0.0, 1),
            command("Gym", f64::NAN, 1),
            command("Gym", 100.0, 0),
            command("Gym", 100.0, 32),
        ] {
            let result = service.create_debit_order(bad).await;
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }
        assert!(service.list_debit_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_debit_order() {
        let (service, _env) = create_test_service().await;
        let gym = service.create_debit_order(command("Gym", 400.0, 1)).await.unwrap();
        let phone = service.create_debit_order(command("Phone", 250.0, 28)).await.unwrap();

        service.delete_debit_order(&gym.id).await.unwrap();
        assert_eq!(service.list_debit_orders().await.unwrap(), vec![phone]);

        let result = service.delete_debit_order(&gym.id).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_upcoming_debit_orders() {
        let (service, _env) = create_test_service().await;
        service.create_debit_order(command("Gym", 400.0, 1)).await.unwrap();
        service.create_debit_order(command("Rent", 5000.0, 31)).await.unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let upcoming = service.upcoming_debit_orders(today).await.unwrap();

        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].debit_order.name, "Rent");
        assert_eq!(upcoming[0].next_due_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(upcoming[0].days_until_due, 18);
        assert_eq!(upcoming[1].debit_order.name, "Gym");
        assert_eq!(upcoming[1].next_due_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }
}
