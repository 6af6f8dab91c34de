use crate::errors::AppError;

/// Parses a path segment into a storage identifier.
pub fn valid_id(id: &str) -> Result<i64, AppError> {
    match id.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::InvalidInput(format!("Invalid experience id: {}", id))),
    }
}
