//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! registration and auth handlers. Catalog/ledger field invariants live in
//! their repositories so they hold for every caller.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Usernames and entity names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum username length
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a registration username: non-empty, 3..=200 chars.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    validate_required_text(username, "Username", MAX_NAME_LEN)?;
    if username.len() < MIN_USERNAME_LEN {
        return Err(AppError::validation(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an email address: `local@domain` with a dot in the domain.
///
/// Intentionally shallow; full RFC 5322 parsing buys nothing here since the
/// address is only a uniqueness key.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "Email", MAX_EMAIL_LEN)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !domain.contains('@')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(())
}

/// Validate a registration password: 6..=128 chars.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::validation("Password is required"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password is too long (max {MAX_PASSWORD_LEN} chars)"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("joao").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"x".repeat(201)).is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("staff@bistro.example").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@bistro.example").is_err());
        assert!(validate_email("staff@").is_err());
        assert!(validate_email("staff@nodot").is_err());
        assert!(validate_email("staff@.leading.dot").is_err());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
