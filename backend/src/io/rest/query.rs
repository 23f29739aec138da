//! Query-string helpers shared by the handlers.
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiError;
use crate::domain::models::{TransactionType, YearMonth};

/// `?month=YYYY-MM`, used by the summary endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthQuery {
    pub month: Option<String>,
}

pub fn parse_month(month: Option<&str>) -> Result<Option<YearMonth>, ApiError> {
    match month.map(str::trim).filter(|m| !m.is_empty()) {
        Some(month) => month.parse::<YearMonth>().map(Some).map_err(ApiError::bad_request),
        None => Ok(None),
    }
}

pub fn parse_transaction_type(value: Option<&str>) -> Result<Option<TransactionType>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value.parse::<TransactionType>().map(Some).map_err(ApiError::bad_request),
        None => Ok(None),
    }
}

pub fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("Invalid date '{}', expected YYYY-MM-DD", value))),
        None => Ok(None),
    }
}
