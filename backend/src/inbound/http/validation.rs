//! Field validation for inbound request bodies.
//!
//! Rules run before the account service is invoked. Violations are
//! collected across fields and reported together, keeping only the first
//! broken rule per field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::error::ApiError;

// Ten digits, first one 6-9.
static MOBILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[6-9][0-9]{9}$").expect("mobile number pattern"));

/// Accumulates per-field violations.
#[derive(Debug, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record a violation for `field` unless one is already present.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_insert_with(|| message.into());
    }

    /// `Ok` when no field violated a rule, otherwise the validation error.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}

/// Require a non-blank value of at least `min` characters.
///
/// `label` is the human-facing field name used in messages, e.g. `"Name"`
/// for the `name` field.
pub fn require_min_len(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
) {
    if value.trim().is_empty() {
        errors.push(field, format!("{label} is required"));
    } else if value.chars().count() < min {
        errors.push(field, format!("{label} must be at least {min} characters"));
    }
}

/// Require a well-formed Indian mobile number.
pub fn require_mobile_number(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "Mobile number is required");
    } else if !MOBILE_NUMBER.is_match(value) {
        errors.push(
            field,
            "Mobile number must be exactly 10 digits and start with 6, 7, 8, or 9",
        );
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FieldErrors, require_min_len, require_mobile_number};

    fn field_message(errors: FieldErrors) -> Option<String> {
        errors.into_result().err().map(|err| match err {
            crate::inbound::http::ApiError::Validation(map) => {
                map.into_values().next().unwrap_or_default()
            }
            other => panic!("unexpected error: {other:?}"),
        })
    }

    #[rstest]
    #[case("6123456789", None)]
    #[case("9999999999", None)]
    #[case(
        "5123456789",
        Some("Mobile number must be exactly 10 digits and start with 6, 7, 8, or 9")
    )]
    #[case(
        "61234567",
        Some("Mobile number must be exactly 10 digits and start with 6, 7, 8, or 9")
    )]
    #[case(
        "61234567890",
        Some("Mobile number must be exactly 10 digits and start with 6, 7, 8, or 9")
    )]
    #[case(
        "612345678a",
        Some("Mobile number must be exactly 10 digits and start with 6, 7, 8, or 9")
    )]
    #[case("", Some("Mobile number is required"))]
    #[case("   ", Some("Mobile number is required"))]
    fn mobile_number_rules(#[case] value: &str, #[case] expected: Option<&str>) {
        let mut errors = FieldErrors::default();
        require_mobile_number(&mut errors, "mobileNumber", value);
        assert_eq!(field_message(errors).as_deref(), expected);
    }

    #[rstest]
    #[case("", Some("Name is required"))]
    #[case("A", Some("Name must be at least 2 characters"))]
    #[case("Ada", None)]
    fn min_len_reports_first_broken_rule(#[case] value: &str, #[case] expected: Option<&str>) {
        let mut errors = FieldErrors::default();
        require_min_len(&mut errors, "name", "Name", value, 2);
        assert_eq!(field_message(errors).as_deref(), expected);
    }

    #[test]
    fn first_violation_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.push("name", "first");
        errors.push("name", "second");
        assert_eq!(field_message(errors).as_deref(), Some("first"));
    }
}
