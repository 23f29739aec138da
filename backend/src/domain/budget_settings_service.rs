//! Main income: the single settings document.
use chrono::Utc;
use tracing::info;

use super::errors::DomainResult;
use super::models::MainIncome;
use super::validation::validate_income_amount;
use crate::storage::{BudgetSettingsStorage, Connection};

#[derive(Clone)]
pub struct BudgetSettingsService<C: Connection> {
    budget_settings_repository: C::BudgetSettingsRepository,
}

impl<C: Connection> BudgetSettingsService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            budget_settings_repository: connection.create_budget_settings_repository(),
        }
    }

    pub async fn get_main_income(&self) -> DomainResult<Option<MainIncome>> {
        Ok(self.budget_settings_repository.get_main_income().await?)
    }

    /// The configured monthly income, 0 if it was never set
    pub async fn monthly_income(&self) -> DomainResult<f64> {
        Ok(self.get_main_income().await?.map(|income| income.amount).unwrap_or(0.0))
    }

    /// Replace the main income; there is only ever one value
    pub async fn set_main_income(&self, amount: f64) -> DomainResult<MainIncome> {
        let main_income = MainIncome {
            amount: validate_income_amount(amount)?,
            updated_at: Utc::now(),
        };
        self.budget_settings_repository.set_main_income(&main_income).await?;
        info!("Main income set to {:.2}", main_income.amount);
        Ok(main_income)
    }
}
