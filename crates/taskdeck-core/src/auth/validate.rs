/*
[INPUT]:  Raw credential fields from the presentation layer
[OUTPUT]: Pass/fail validation with the first failing rule
[POS]:    Auth layer - local pre-network validation
[UPDATE]: When validation rules or their ordering change
*/

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose `local@domain.tld` shape; real deliverability is the server's
/// problem.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether the email matches the accepted shape
pub fn email_is_well_formed(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate login credentials, short-circuiting at the first failure.
///
/// Order: both fields non-empty, then email shape.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !email_is_well_formed(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate registration input, short-circuiting at the first failure.
///
/// Order: all fields non-empty, email shape, password length, confirmation
/// match.
pub fn validate_register(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !email_is_well_formed(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
