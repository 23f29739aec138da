//! Domain model for a transaction.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    /// Always positive; `transaction_type` carries the sign
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category_id: Option<String>,
    pub category_name: String,
    pub timestamp: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Generate a unique transaction ID from the type and a millisecond timestamp.
    /// Format: <type>-<timestamp_ms>-<random_suffix>
    /// Example: ex-1625846400123-af3c91d2
    pub fn generate_id(transaction_type: TransactionType, timestamp_ms: i64) -> String {
        let prefix = match transaction_type {
            TransactionType::Income => "in",
            TransactionType::Expense => "ex",
        };
        let suffix: String = uuid::Uuid::new_v4().simple().to_string().chars().take(8).collect();
        format!("{}-{}-{}", prefix, timestamp_ms, suffix)
    }

    /// The amount with the sign implied by the transaction type
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_prefix() {
        let income_id = Transaction::generate_id(TransactionType::Income, 1_700_000_000_000);
        let expense_id = Transaction::generate_id(TransactionType::Expense, 1_700_000_000_000);

        assert!(income_id.starts_with("in-1700000000000-"));
        assert!(expense_id.starts_with("ex-1700000000000-"));
        assert_ne!(
            Transaction::generate_id(TransactionType::Income, 1),
            Transaction::generate_id(TransactionType::Income, 1)
        );
    }

    #[test]
    fn test_transaction_type_parsing() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!(" expense ".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
    }
}
