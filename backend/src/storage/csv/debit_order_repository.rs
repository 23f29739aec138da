use anyhow::Result;
use async_trait::async_trait;
use shared::{ChangeKind, Collection};
use tracing::{info, warn};

use super::connection::CsvConnection;
use crate::domain::models::DebitOrder;
use crate::storage::traits::{Connection, DebitOrderStorage};

const DEBIT_ORDERS_FILE: &str = "debit_orders.csv";
const DEBIT_ORDER_HEADER: &[&str] = &["id", "name", "amount", "due_date"];

/// CSV-based debit order repository
#[derive(Clone)]
pub struct DebitOrderRepository {
    connection: CsvConnection,
}

impl DebitOrderRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_debit_orders(&self) -> Result<Vec<DebitOrder>> {
        self.connection.read_records(DEBIT_ORDERS_FILE)
    }
}

#[async_trait]
impl DebitOrderStorage for DebitOrderRepository {
    async fn store_debit_order(&self, debit_order: &DebitOrder) -> Result<()> {
        info!(
            "Storing debit order in CSV: {} due on day {}",
            debit_order.name, debit_order.due_date
        );
        let _guard = self.connection.lock_for_write().await;

        let mut debit_orders = self.read_debit_orders()?;
        debit_orders.push(debit_order.clone());
        self.connection
            .write_records(DEBIT_ORDERS_FILE, DEBIT_ORDER_HEADER, &debit_orders)?;

        self.connection
            .change_feed()
            .publish(Collection::DebitOrders, ChangeKind::Added, &debit_order.id);
        Ok(())
    }

    async fn list_debit_orders(&self) -> Result<Vec<DebitOrder>> {
        self.read_debit_orders()
    }

    async fn delete_debit_order(&self, debit_order_id: &str) -> Result<bool> {
        info!("Deleting debit order from CSV: {}", debit_order_id);
        let _guard = self.connection.lock_for_write().await;

        let mut debit_orders = self.read_debit_orders()?;
        match debit_orders.iter().position(|d| d.id == debit_order_id) {
            Some(index) => {
                debit_orders.remove(index);
                self.connection
                    .write_records(DEBIT_ORDERS_FILE, DEBIT_ORDER_HEADER, &debit_orders)?;
                self.connection
                    .change_feed()
                    .publish(Collection::DebitOrders, ChangeKind::Removed, debit_order_id);
                Ok(true)
            }
            None => {
                warn!("Debit order not found for deletion: {}", debit_order_id);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_store_and_delete_debit_orders() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = DebitOrderRepository::new(env.connection.clone());

        let rent = DebitOrder { id: "d1".to_string(), name: "Rent".to_string(), amount: 7500.0, due_date: 1 };
        let gym = DebitOrder { id: "d2".to_string(), name: "Gym".to_string(), amount: 450.0, due_date: 25 };
        repo.store_debit_order(&rent).await.unwrap();
        repo.store_debit_order(&gym).await.unwrap();

        assert_eq!(repo.list_debit_orders().await.unwrap(), vec![rent.clone(), gym.clone()]);

        assert!(repo.delete_debit_order("d2").await.unwrap());
        assert!(!repo.delete_debit_order("d3").await.unwrap());
        assert_eq!(repo.list_debit_orders().await.unwrap(), vec![rent]);
    }
}
