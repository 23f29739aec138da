//! # Storage Module
//!
//! Handles all data persistence for the budget tracker.
//!
//! The domain layer talks to the storage traits in [`traits`]; the CSV
//! implementation in [`csv`] keeps each collection in a file under the data
//! directory and the main income in a YAML document. Every successful
//! mutation is published on the [`ChangeFeed`], which is how clients learn
//! that their snapshot is stale.
//!
//! ```text
//! data/
//! ├── transactions.csv
//! ├── categories.csv
//! ├── debit_orders.csv
//! └── budget_settings.yaml
//! ```

pub mod change_feed;
pub mod csv;
pub mod traits;

pub use change_feed::{ChangeFeed, ChangeNotice};
pub use traits::{
    BudgetSettingsStorage, CategoryStorage, Connection, DebitOrderStorage, TransactionStorage,
};
