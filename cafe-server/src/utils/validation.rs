//! Input validation helpers
//!
//! Text length limits and checks for incoming orders.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

/// Caller-chosen order ids
pub const MAX_ORDER_ID_LEN: usize = 50;

/// Beverage names
pub const MAX_PRODUCT_LEN: usize = 100;

/// Cups in a single order, summed over all entries
pub const MAX_ORDER_SIZE: i64 = 1000;

/// Validate that a required string is non-empty and within the length limit (in chars).
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate a positive count no larger than `max`.
pub fn validate_count(value: i64, field: &str, max: i64) -> Result<(), AppError> {
    if value < 1 {
        return Err(AppError::validation(format!(
            "{field} must be at least 1, got {value}"
        )));
    }
    if value > max {
        return Err(AppError::validation(format!(
            "{field} is too large ({value}, max {max})"
        )));
    }
    Ok(())
}
