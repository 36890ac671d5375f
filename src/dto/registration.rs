//! Registration input.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Compiled regex for username validation.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap());

/// Credentials submitted when creating an account.
#[derive(Debug, Deserialize, Validate)]
pub struct Registration {
    /// 2-32 characters: letters, digits, `_`, `.` or `-`.
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    #[validate(regex(
        path = "*USERNAME_REGEX",
        message = "Username may only contain letters, digits, '_', '.' and '-'"
    ))]
    pub username: String,

    /// At least 8 characters with an upper case letter, a lower case letter and a digit.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength").with_message(
            "Password must contain an upper case letter, a lower case letter and a digit".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(registration("jz", "abcd1A23").validate().is_ok());
        assert!(registration("j", "abcd1A23").validate().is_err());
    }

    #[test]
    fn test_weak_passwords() {
        assert!(registration("pmccartney", "short1A").validate().is_err());
        assert!(registration("pmccartney", "alllowercase1").validate().is_err());
        assert!(registration("pmccartney", "NoDigitsHere").validate().is_err());
    }

    #[test]
    fn test_username_characters() {
        assert!(registration("paul mccartney", "abcd1A23").validate().is_err());
        assert!(registration("paul.mc-cartney_1", "abcd1A23").validate().is_ok());
    }
}
