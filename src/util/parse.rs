use crate::error::AppError;

/// Parses a Discord snowflake stored as a string column back into a `u64`.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed value
/// - `Err(AppError::InternalError)` - The stored value is not a valid id
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|e| AppError::InternalError(format!("invalid id '{}': {}", value, e)))
}
