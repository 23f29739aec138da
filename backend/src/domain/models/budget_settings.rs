//! Domain model for the singleton budget settings document.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainIncome {
    pub amount: f64,
    pub updated_at: DateTime<Utc>,
}
