use anyhow::Result;
use async_trait::async_trait;
use shared::{ChangeKind, Collection};
use tracing::{info, warn};

use super::connection::CsvConnection;
use crate::domain::models::Category;
use crate::storage::traits::{CategoryStorage, Connection};

const CATEGORIES_FILE: &str = "categories.csv";
const CATEGORY_HEADER: &[&str] = &["id", "name", "category_type"];

/// CSV-based category repository
#[derive(Clone)]
pub struct CategoryRepository {
    connection: CsvConnection,
}

impl CategoryRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_categories(&self) -> Result<Vec<Category>> {
        self.connection.read_records(CATEGORIES_FILE)
    }
}

#[async_trait]
impl CategoryStorage for CategoryRepository {
    async fn store_category(&self, category: &Category) -> Result<()> {
        info!("Storing category in CSV: {} ({})", category.name, category.id);
        let _guard = self.connection.lock_for_write().await;

        let mut categories = self.read_categories()?;
        categories.push(category.clone());
        self.connection
            .write_records(CATEGORIES_FILE, CATEGORY_HEADER, &categories)?;

        self.connection
            .change_feed()
            .publish(Collection::Categories, ChangeKind::Added, &category.id);
        Ok(())
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        let categories = self.read_categories()?;
        Ok(categories.into_iter().find(|c| c.id == category_id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.read_categories()
    }

    async fn delete_category(&self, category_id: &str) -> Result<bool> {
        info!("Deleting category from CSV: {}", category_id);
        let _guard = self.connection.lock_for_write().await;

        let mut categories = self.read_categories()?;
        match categories.iter().position(|c| c.id == category_id) {
            Some(index) => {
                categories.remove(index);
                self.connection
                    .write_records(CATEGORIES_FILE, CATEGORY_HEADER, &categories)?;
                self.connection
                    .change_feed()
                    .publish(Collection::Categories, ChangeKind::Removed, category_id);
                Ok(true)
            }
            None => {
                warn!("Category not found for deletion: {}", category_id);
                Ok(false)
            }
        }
    }
}
