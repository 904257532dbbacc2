/**
 * Account Field Validation
 *
 * Checks shared by registration and profile updates. Each check records
 * its message in a `FieldErrors` map so a request reports every bad field
 * at once.
 */

use crate::shared::FieldErrors;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Something before and after a single `@`, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

pub fn check_username(username: &str, errors: &mut FieldErrors) {
    if username.is_empty() {
        errors.add("username", "can't be blank");
    } else if !is_valid_username(username) {
        errors.add(
            "username",
            "must be 3-30 characters, start with a letter, and contain only letters, numbers, and underscores",
        );
    }
}

pub fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.add("email", "can't be blank");
    } else if !is_valid_email(email) {
        errors.add("email", "is invalid");
    }
}

pub fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.add("password", "can't be blank");
    } else if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.add(
            "password",
            format!("is too short (minimum is {} characters)", PASSWORD_MIN_LENGTH),
        );
    }
}
