//! Domain model for a category.
use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub category_type: TransactionType,
}

impl Category {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
