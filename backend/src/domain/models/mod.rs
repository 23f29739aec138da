//! Domain models for the budget tracker.
//!
//! These are the in-memory shapes the services work with. Timestamps are
//! proper `chrono` values here; the `shared` crate carries the string forms
//! that travel over HTTP.

pub mod budget_settings;
pub mod category;
pub mod debit_order;
pub mod period;
pub mod transaction;

pub use budget_settings::MainIncome;
pub use category::Category;
pub use debit_order::{DebitOrder, UpcomingDebitOrder};
pub use period::YearMonth;
pub use transaction::{Transaction, TransactionType};
