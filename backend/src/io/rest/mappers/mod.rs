//! Conversions between domain models and the `shared` DTOs.

pub mod budget_mapper;
pub mod category_mapper;
pub mod debit_order_mapper;
pub mod transaction_mapper;

pub use budget_mapper::BudgetMapper;
pub use category_mapper::CategoryMapper;
pub use debit_order_mapper::DebitOrderMapper;
pub use transaction_mapper::TransactionMapper;
