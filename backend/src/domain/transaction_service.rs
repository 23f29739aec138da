//! Transaction service domain logic for the budget tracker.
use chrono::Utc;
use tracing::info;

use super::commands::transactions::{
    CreateTransactionCommand, PaginationInfo, TransactionListQuery, TransactionListResult,
};
use super::errors::{DomainError, DomainResult};
use super::models::{period::parse_timestamp, Transaction, YearMonth};
use super::validation::{validate_positive_amount, validate_text};
use crate::storage::{CategoryStorage, Connection, TransactionStorage};

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Clone)]
pub struct TransactionService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    category_repository: C::CategoryRepository,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            category_repository: connection.create_category_repository(),
        }
    }

    pub async fn create_transaction(&self, command: CreateTransactionCommand) -> DomainResult<Transaction> {
        let description = validate_text("description", &command.description)?;
        let amount = validate_positive_amount(command.amount)?;

        let category_id = command.category_id.trim();
        if category_id.is_empty() {
            return Err(DomainError::Validation("Please select a category".to_string()));
        }
        let category = self
            .category_repository
            .get_category(category_id)
            .await?
            .ok_or_else(|| DomainError::Validation(format!("Category {} does not exist", category_id)))?;
        if category.category_type != command.transaction_type {
            return Err(DomainError::Validation(format!(
                "Category '{}' is for {} and cannot be used for {}",
                category.name, category.category_type, command.transaction_type
            )));
        }

        let now = Utc::now();
        let timestamp = match command.timestamp.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_timestamp(raw).map_err(DomainError::Validation)?,
            _ => now,
        };

        let transaction = Transaction {
            id: Transaction::generate_id(command.transaction_type, now.timestamp_millis()),
            description,
            amount,
            transaction_type: command.transaction_type,
            category_id: Some(category.id),
            category_name: category.name,
            timestamp,
            created_at: now,
        };
        self.transaction_repository.store_transaction(&transaction).await?;

        info!(
            "Recorded {} of {:.2} in '{}' ({})",
            transaction.transaction_type, transaction.amount, transaction.category_name, transaction.id
        );
        Ok(transaction)
    }

    /// Page through transactions, most recent first
    pub async fn list_transactions(&self, query: TransactionListQuery) -> DomainResult<TransactionListResult> {
        let mut transactions = self.recent_transactions(query.month).await?;
        if let Some(transaction_type) = query.transaction_type {
            transactions.retain(|t| t.transaction_type == transaction_type);
        }

        if let Some(after_id) = query.after {
            if let Some(after_index) = transactions.iter().position(|t| t.id == after_id) {
                transactions.drain(..=after_index);
            }
        }

        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as usize;
        let has_more = transactions.len() > limit;
        transactions.truncate(limit);

        let next_cursor = if has_more {
            transactions.last().map(|t| t.id.clone())
        } else {
            None
        };

        Ok(TransactionListResult {
            transactions,
            pagination: PaginationInfo { has_more, next_cursor },
        })
    }

    /// Every transaction (optionally in one month), most recent first
    pub async fn recent_transactions(&self, month: Option<YearMonth>) -> DomainResult<Vec<Transaction>> {
        let mut transactions = self.transaction_repository.list_transactions().await?;
        if let Some(month) = month {
            transactions.retain(|t| month.contains(&t.timestamp));
        }
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(transactions)
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> DomainResult<Transaction> {
        self.transaction_repository
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Transaction", transaction_id))
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> DomainResult<()> {
        if !self.transaction_repository.delete_transaction(transaction_id).await? {
            return Err(DomainError::not_found("Transaction", transaction_id));
        }
        info!("Deleted transaction {}", transaction_id);
        Ok(())
    }
}
