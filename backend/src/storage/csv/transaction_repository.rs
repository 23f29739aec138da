use anyhow::Result;
use async_trait::async_trait;
use shared::{ChangeKind, Collection};
use tracing::{info, warn};

use super::connection::CsvConnection;
use crate::domain::models::Transaction;
use crate::storage::traits::{Connection, TransactionStorage};

const TRANSACTIONS_FILE: &str = "transactions.csv";
const TRANSACTION_HEADER: &[&str] = &[
    "id",
    "description",
    "amount",
    "transaction_type",
    "category_id",
    "category_name",
    "timestamp",
    "created_at",
];

/// CSV-based transaction repository
#[derive(Clone)]
pub struct TransactionRepository {
    connection: CsvConnection,
}

impl TransactionRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_transactions(&self) -> Result<Vec<Transaction>> {
        self.connection.read_records(TRANSACTIONS_FILE)
    }

    fn write_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.connection
            .write_records(TRANSACTIONS_FILE, TRANSACTION_HEADER, transactions)
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        info!("Storing transaction in CSV: {}", transaction.id);
        let _guard = self.connection.lock_for_write().await;

        let mut transactions = self.read_transactions()?;
        transactions.push(transaction.clone());

        // Keep the file in chronological order
        transactions.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        self.write_transactions(&transactions)?;

        self.connection
            .change_feed()
            .publish(Collection::Transactions, ChangeKind::Added, &transaction.id);
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let transactions = self.read_transactions()?;
        Ok(transactions.into_iter().find(|t| t.id == transaction_id))
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.read_transactions()
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool> {
        info!("Deleting transaction from CSV: {}", transaction_id);
        let _guard = self.connection.lock_for_write().await;

        let mut transactions = self.read_transactions()?;
        match transactions.iter().position(|t| t.id == transaction_id) {
            Some(index) => {
                transactions.remove(index);
                self.write_transactions(&transactions)?;
                self.connection
                    .change_feed()
                    .publish(Collection::Transactions, ChangeKind::Removed, transaction_id);
                Ok(true)
            }
            None => {
                warn!("Transaction not found for deletion: {}", transaction_id);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{period::parse_timestamp, TransactionType};
    use crate::storage::csv::test_utils::TestEnvironment;

    fn transaction(id: &str, timestamp: &str, amount: f64) -> Transaction {
        let timestamp = parse_timestamp(timestamp).unwrap();
        Transaction {
            id: id.to_string(),
            description: format!("Transaction {}", id),
            amount,
            transaction_type: TransactionType::Expense,
            category_id: Some("cat-food".to_string()),
            category_name: "Food".to_string(),
            timestamp,
            created_at: timestamp,
        }
    }

    #[tokio::test]
    async fn test_store_and_retrieve_transaction() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = TransactionRepository::new(env.connection.clone());

        let mut stored = transaction("tx_001", "2025-01-15T10:30:00Z", 25.50);
        stored.description = "Coffee, cake".to_string();
        stored.category_id = None;
        repo.store_transaction(&stored).await.unwrap();

        let retrieved = repo.get_transaction("tx_001").await.unwrap().unwrap();
        assert_eq!(retrieved, stored);
        assert!(repo.get_transaction("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_kept_in_chronological_order() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = TransactionRepository::new(env.connection.clone());

        repo.store_transaction(&transaction("late", "2025-01-20T10:00:00Z", 1.0)).await.unwrap();
        repo.store_transaction(&transaction("early", "2025-01-10T10:00:00Z", 2.0)).await.unwrap();

        let ids: Vec<String> = repo.list_transactions().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = TransactionRepository::new(env.connection.clone());

        for i in 1..=3 {
            let tx = transaction(&format!("tx_{}", i), &format!("2025-01-0{}T10:00:00Z", i), i as f64);
            repo.store_transaction(&tx).await.unwrap();
        }

        assert!(repo.delete_transaction("tx_2").await.unwrap());
        assert!(!repo.delete_transaction("tx_2").await.unwrap());

        let remaining = repo.list_transactions().await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0], transaction("tx_1", "2025-01-01T10:00:00Z", 1.0));
        assert_eq!(remaining[1], transaction("tx_3", "2025-01-03T10:00:00Z", 3.0));
    }

    #[tokio::test]
    async fn test_mutations_publish_changes() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = TransactionRepository::new(env.connection.clone());
        let feed = env.connection.change_feed().clone();

        repo.store_transaction(&transaction("tx_1", "2025-01-01T10:00:00Z", 1.0)).await.unwrap();
        assert_eq!(feed.revision(), 1);

        repo.delete_transaction("nope").await.unwrap();
        assert_eq!(feed.revision(), 1);

        repo.delete_transaction("tx_1").await.unwrap();
        let notice = feed.current();
        assert_eq!(notice.revision, 2);
        assert_eq!(notice.kind, Some(ChangeKind::Removed));
        assert_eq!(notice.document_id.as_deref(), Some("tx_1"));
    }
}
