//! # Budget Settings Repository
//!
//! Stores the singleton budget settings document as `budget_settings.yaml`
//! at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! main_income:
//!   amount: 25000.0
//!   updated_at: "2025-01-21T19:35:00Z"
//! data_format_version: "1.0"
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{ChangeKind, Collection};
use std::fs;
use tracing::{debug, info};

use super::connection::CsvConnection;
use crate::domain::models::MainIncome;
use crate::storage::traits::{BudgetSettingsStorage, Connection};

const SETTINGS_FILE: &str = "budget_settings.yaml";
const MAIN_INCOME_DOCUMENT_ID: &str = "mainIncome";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BudgetSettingsDocument {
    main_income: Option<MainIncome>,
    data_format_version: String,
}

impl Default for BudgetSettingsDocument {
    fn default() -> Self {
        Self {
            main_income: None,
            data_format_version: "1.0".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct BudgetSettingsRepository {
    connection: CsvConnection,
}

impl BudgetSettingsRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_document(&self) -> Result<BudgetSettingsDocument> {
        let path = self.connection.file_path(SETTINGS_FILE);
        if !path.exists() {
            debug!("No budget settings at {}, using defaults", path.display());
            return Ok(BudgetSettingsDocument::default());
        }
        let yaml_content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(document)
    }
}

#[async_trait]
impl BudgetSettingsStorage for BudgetSettingsRepository {
    async fn get_main_income(&self) -> Result<Option<MainIncome>> {
        Ok(self.read_document()?.main_income)
    }

    async fn set_main_income(&self, main_income: &MainIncome) -> Result<()> {
        info!("Setting main income to {:.2}", main_income.amount);
        let _guard = self.connection.lock_for_write().await;

        let mut document = self.read_document()?;
        document.main_income = Some(main_income.clone());
        let yaml_content = serde_yaml::to_string(&document)?;
        self.connection
            .write_file_atomically(SETTINGS_FILE, &yaml_content)?;

        self.connection.change_feed().publish(
            Collection::BudgetSettings,
            ChangeKind::Modified,
            MAIN_INCOME_DOCUMENT_ID,
        );
        Ok(())
    }
}
