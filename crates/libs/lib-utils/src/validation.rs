//! # Validation Utilities
//!
//! Input validation helpers for form values.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Invalid email format".to_string()),
    }
}

/// Parse a currency amount typed into a form.
///
/// Surrounding whitespace is ignored; the value must be a finite number.
pub fn parse_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid amount '{}'", value))?;

    if !amount.is_finite() {
        return Err(format!("Invalid amount '{}'", value));
    }

    Ok(amount)
}
