//! Required-field checks applied before anything reaches the store.
use super::errors::{DomainError, DomainResult};

pub const MAX_TEXT_LENGTH: usize = 256;

/// Trim a free-text field and check it is 1-256 characters long
pub fn validate_text(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("Please enter a {}", field)));
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            capitalize(field),
            MAX_TEXT_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

/// Amounts are stored positive; the record type carries the sign
pub fn validate_positive_amount(amount: f64) -> DomainResult<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DomainError::Validation("Please enter a valid amount".to_string()));
    }
    Ok(amount)
}

pub fn validate_income_amount(amount: f64) -> DomainResult<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::Validation(
            "Main income must be zero or a positive amount".to_string(),
        ));
    }
    Ok(amount)
}

pub fn validate_due_date(due_date: u32) -> DomainResult<u32> {
    if !(1..=31).contains(&due_date) {
        return Err(DomainError::Validation(format!(
            "Due date must be a day of the month between 1 and 31, got {}",
            due_date
        )));
    }
    Ok(due_date)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
