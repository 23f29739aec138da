//! Domain model for a recurring debit order.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebitOrder {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Day of the month, 1-31
    pub due_date: u32,
}

impl DebitOrder {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// The next occurrence of a debit order relative to some day
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingDebitOrder {
    pub debit_order: DebitOrder,
    pub next_due_date: NaiveDate,
    pub days_until_due: i64,
}
