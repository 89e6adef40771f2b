//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Field checks are plain functions returning a human-readable message on
//! failure; the backend collects them into per-field error lists.

use chrono::{DateTime, Utc};
use validator::ValidateEmail;

/// Validate a user name: alphabetic only, 3-50 characters
pub fn validate_user_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len < 3 {
        return Err("Name must be at least 3 characters".to_string());
    }
    if len > 50 {
        return Err("Name must be at most 50 characters".to_string());
    }
    if !name.chars().all(|c| c.is_alphabetic()) {
        return Err("Name must contain only letters".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a catway number
pub fn validate_catway_number(number: i32) -> Result<(), String> {
    if number < 1 {
        return Err("Catway number must be a positive integer".to_string());
    }
    Ok(())
}

/// Validate a catway state description: 3-100 characters
pub fn validate_catway_state(state: &str) -> Result<(), String> {
    let len = state.chars().count();
    if len < 3 {
        return Err("State description must be at least 3 characters".to_string());
    }
    if len > 100 {
        return Err("State description must be at most 100 characters".to_string());
    }
    Ok(())
}

/// Validate a boat name: 2-50 characters with at least one letter
pub fn validate_boat_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len < 2 {
        return Err("Boat name must be at least 2 characters".to_string());
    }
    if len > 50 {
        return Err("Boat name must be at most 50 characters".to_string());
    }
    if !name.chars().any(|c| c.is_alphabetic()) {
        return Err("Boat name must contain at least one letter".to_string());
    }
    Ok(())
}

/// Validate a reservation client name: 3-100 characters
pub fn validate_client_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len < 3 {
        return Err("Client name must be at least 3 characters".to_string());
    }
    if len > 100 {
        return Err("Client name must be at most 100 characters".to_string());
    }
    Ok(())
}

/// Validate a check-in date against the current time
///
/// Reservations cannot start in the past.
pub fn validate_check_in(check_in: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), String> {
    if check_in < now {
        return Err("Check-in date cannot be in the past".to_string());
    }
    Ok(())
}

/// Validate that a check-out date is strictly after check-in
pub fn validate_check_out(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> Result<(), String> {
    if check_out <= check_in {
        return Err("Check-out date must be after the check-in date".to_string());
    }
    Ok(())
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Collects per-field validation failures
///
/// Services run each field check through `check` and call `finish` once;
/// an empty collector means the input passed.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a single field check
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.errors.push(FieldError::new(field, message));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collector, yielding the failures if any
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    #[test]
    fn test_validate_user_name() {
        assert!(validate_user_name("Alice").is_ok());
        assert!(validate_user_name("Bob").is_ok());
        assert!(validate_user_name("Al").is_err());
        assert!(validate_user_name(&"a".repeat(51)).is_err());
        assert!(validate_user_name("Alice42").is_err());
        assert!(validate_user_name("Alice Smith").is_err());
        assert!(validate_user_name("").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("spaces in@email.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_catway_number() {
        assert!(validate_catway_number(1).is_ok());
        assert!(validate_catway_number(42).is_ok());
        assert!(validate_catway_number(0).is_err());
        assert!(validate_catway_number(-3).is_err());
    }

    #[test]
    fn test_validate_catway_state() {
        assert!(validate_catway_state("good condition").is_ok());
        assert!(validate_catway_state("ok").is_err());
        assert!(validate_catway_state(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_boat_name() {
        assert!(validate_boat_name("Orion").is_ok());
        assert!(validate_boat_name("B2").is_ok());
        // Digits only: no alphabetic character
        assert!(validate_boat_name("12345").is_err());
        assert!(validate_boat_name("A").is_err());
        assert!(validate_boat_name(&"b".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_client_name() {
        assert!(validate_client_name("Jean Dupont").is_ok());
        assert!(validate_client_name("Jo").is_err());
        assert!(validate_client_name(&"c".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_check_in_not_in_past() {
        let now = Utc::now();
        assert!(validate_check_in(now, now).is_ok());
        assert!(validate_check_in(now + Duration::days(1), now).is_ok());
        assert!(validate_check_in(now - Duration::seconds(1), now).is_err());
    }

    #[test]
    fn test_validate_check_out_after_check_in() {
        let check_in = Utc::now();
        assert!(validate_check_out(check_in, check_in + Duration::days(2)).is_ok());
        assert!(validate_check_out(check_in, check_in).is_err());
        assert!(validate_check_out(check_in, check_in - Duration::days(1)).is_err());
    }

    #[test]
    fn test_field_errors_collects_failures() {
        let mut errors = FieldErrors::new();
        errors.check("name", validate_user_name("x"));
        errors.check("email", validate_email("test@example.com"));
        errors.check("password", validate_password("123"));

        let failures = errors.finish().unwrap_err();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field, "name");
        assert_eq!(failures[1].field, "password");
    }

    #[test]
    fn test_field_errors_empty_is_ok() {
        let mut errors = FieldErrors::new();
        errors.check("email", validate_email("test@example.com"));
        assert!(errors.finish().is_ok());
    }

    // Property-based tests
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_alphabetic_names_in_range_valid(name in "[a-zA-Z]{3,50}") {
            prop_assert!(validate_user_name(&name).is_ok());
        }

        #[test]
        fn prop_names_with_digits_invalid(name in "[a-zA-Z]{2,20}[0-9]{1,5}") {
            prop_assert!(validate_user_name(&name).is_err());
        }

        #[test]
        fn prop_password_length_valid(len in 6usize..=128) {
            let password: String = (0..len).map(|_| 'a').collect();
            prop_assert!(validate_password(&password).is_ok());
        }

        #[test]
        fn prop_numeric_boat_names_invalid(name in "[0-9]{2,50}") {
            prop_assert!(validate_boat_name(&name).is_err());
        }

        #[test]
        fn prop_boat_names_with_letter_valid(name in "[0-9]{0,10}[a-z][0-9]{0,10}") {
            if name.chars().count() >= 2 {
                prop_assert!(validate_boat_name(&name).is_ok());
            }
        }

        #[test]
        fn prop_check_out_must_follow_check_in(offset_secs in 1i64..=86400 * 30) {
            let check_in = Utc::now();
            let check_out = check_in + Duration::seconds(offset_secs);
            prop_assert!(validate_check_out(check_in, check_out).is_ok());
            prop_assert!(validate_check_out(check_out, check_in).is_err());
        }
    }
}
