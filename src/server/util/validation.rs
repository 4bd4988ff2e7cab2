use validator::ValidateEmail;

use crate::server::error::AppError;

/// Returns the value if it is present and contains non-whitespace characters.
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(AppError::Validation)` - Value missing or blank
pub fn require_non_blank(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AppError::Validation(format!("{} must not be blank", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Rejects a value that is present but blank. Absent values pass.
pub fn reject_blank(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(AppError::Validation(format!("{} must not be blank", field)))
        }
        _ => Ok(()),
    }
}

/// Checks an email address with the same rules the gateway applies.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if !email.validate_email() {
        return Err(AppError::Validation(format!("Invalid email: {}", email)));
    }

    Ok(())
}
