//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined
//! in the `shared` crate to these internal types.

pub mod transactions {
    use crate::domain::models::{Transaction, TransactionType, YearMonth};

    /// Input for creating a new transaction.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        pub description: String,
        pub amount: f64,
        pub transaction_type: TransactionType,
        pub category_id: String,
        pub timestamp: Option<String>,
    }

    /// Query parameters for listing transactions.
    #[derive(Debug, Clone, Default)]
    pub struct TransactionListQuery {
        pub month: Option<YearMonth>,
        pub transaction_type: Option<TransactionType>,
        pub after: Option<String>,
        pub limit: Option<u32>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct PaginationInfo {
        pub has_more: bool,
        pub next_cursor: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct TransactionListResult {
        pub transactions: Vec<Transaction>,
        pub pagination: PaginationInfo,
    }
}

pub mod categories {
    use crate::domain::models::TransactionType;

    #[derive(Debug, Clone)]
    pub struct CreateCategoryCommand {
        pub name: String,
        pub category_type: TransactionType,
    }
}

pub mod debit_orders {
    #[derive(Debug, Clone)]
    pub struct CreateDebitOrderCommand {
        pub name: String,
        pub amount: f64,
        pub due_date: u32,
    }
}
