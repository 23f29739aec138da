//! Category management for the budget tracker.
use tracing::info;

use super::commands::categories::CreateCategoryCommand;
use super::errors::{DomainError, DomainResult};
use super::models::{Category, TransactionType};
use super::validation::validate_text;
use crate::storage::{CategoryStorage, Connection};

#[derive(Clone)]
pub struct CategoryService<C: Connection> {
    category_repository: C::CategoryRepository,
}

impl<C: Connection> CategoryService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            category_repository: connection.create_category_repository(),
        }
    }

    pub async fn create_category(&self, command: CreateCategoryCommand) -> DomainResult<Category> {
        let name = validate_text("category name", &command.name)?;

        let category = Category {
            id: Category::generate_id(),
            name,
            category_type: command.category_type,
        };
        self.category_repository.store_category(&category).await?;

        info!("Created {} category '{}' ({})", category.category_type, category.name, category.id);
        Ok(category)
    }

    /// Categories sorted by name, optionally only one type
    pub async fn list_categories(&self, category_type: Option<TransactionType>) -> DomainResult<Vec<Category>> {
        let mut categories = self.category_repository.list_categories().await?;
        if let Some(category_type) = category_type {
            categories.retain(|c| c.category_type == category_type);
        }
        categories.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(categories)
    }

    /// Transactions recorded against the category keep their copy of its name
    pub async fn delete_category(&self, category_id: &str) -> DomainResult<()> {
        if !self.category_repository.delete_category(category_id).await? {
            return Err(DomainError::not_found("Category", category_id));
        }
        info!("Deleted category {}", category_id);
        Ok(())
    }
}
