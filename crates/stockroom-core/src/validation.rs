//! # Validation Module
//!
//! Input validation rules for operator text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console reader (stockroom-cli)                               │
//! │  ├── Reads one line                                                    │
//! │  └── Loops until THIS MODULE accepts the text                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure)                                           │
//! │  ├── Trims surrounding whitespace                                      │
//! │  └── Returns the cleaned value or a ValidationError                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_positive_integer, validate_descriptive_text};
//!
//! assert_eq!(parse_positive_integer("price", " 15 ").unwrap(), 15);
//! assert!(parse_positive_integer("price", "-5").is_err());
//! assert_eq!(validate_descriptive_text("name", "  Kale ").unwrap(), "Kale");
//! assert!(validate_descriptive_text("name", "123").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a strictly positive whole number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Text that is not a whole number → `NotANumber`
/// - Zero or negative → `MustBePositive`
/// - Larger than `u64::MAX` → `TooLarge`
///
/// ```text
/// "5"    ──► Ok(5)
/// "-5"   ──► MustBePositive
/// "0"    ──► MustBePositive
/// "abc"  ──► NotANumber
/// "2.5"  ──► NotANumber
/// ```
pub fn parse_positive_integer(field: &'static str, text: &str) -> ValidationResult<u64> {
    let text = text.trim();

    // i128 holds every u64 plus the negatives, so sign and magnitude
    // problems are told apart from plain garbage.
    let value: i128 = text.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: text.to_string(),
    })?;

    if value <= 0 {
        return Err(ValidationError::MustBePositive { field, value });
    }

    u64::try_from(value).map_err(|_| ValidationError::TooLarge {
        field,
        max: u64::MAX,
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates descriptive text such as a product name or category.
///
/// ## Rules
/// - Surrounding whitespace is trimmed (and stays trimmed in the result)
/// - Must not be empty
/// - Must not consist only of ASCII digits (`½` or `Ⅳ` count as text)
pub fn validate_descriptive_text(field: &'static str, text: &str) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NumericText { field });
    }

    Ok(text.to_string())
}

/// Normalises a lookup key: trimmed and lowercased.
///
/// Names and categories are compared through this on both sides.
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer("qty", "5"), Ok(5));
        assert_eq!(parse_positive_integer("qty", "  42\n"), Ok(42));
        assert_eq!(parse_positive_integer("qty", "+7"), Ok(7));
        assert_eq!(
            parse_positive_integer("qty", "18446744073709551615"),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn test_parse_positive_integer_rejects_non_positive() {
        assert!(matches!(
            parse_positive_integer("qty", "-5"),
            Err(ValidationError::MustBePositive { value: -5, .. })
        ));
        assert!(matches!(
            parse_positive_integer("qty", "0"),
            Err(ValidationError::MustBePositive { value: 0, .. })
        ));
    }

    #[test]
    fn test_parse_positive_integer_rejects_text() {
        for input in ["abc", "", "2.5", "5 apples", "five"] {
            assert!(
                matches!(
                    parse_positive_integer("qty", input),
                    Err(ValidationError::NotANumber { .. })
                ),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_positive_integer_rejects_overflow() {
        assert!(matches!(
            parse_positive_integer("qty", "18446744073709551616"),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_descriptive_text() {
        assert_eq!(
            validate_descriptive_text("name", "  Leafy green "),
            Ok("Leafy green".to_string())
        );
        assert_eq!(validate_descriptive_text("name", "7up"), Ok("7up".to_string()));

        assert_eq!(
            validate_descriptive_text("name", "   "),
            Err(ValidationError::Required { field: "name" })
        );
        assert_eq!(
            validate_descriptive_text("name", " 123 "),
            Err(ValidationError::NumericText { field: "name" })
        );
    }

    #[test]
    fn test_non_ascii_numerals_are_text() {
        for input in ["½", "Ⅳ", "٣", "12½"] {
            assert_eq!(
                validate_descriptive_text("type", input),
                Ok(input.to_string()),
                "{input:?} should be accepted as text"
            );
        }
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  LeTTuce "), "lettuce");
        assert_eq!(normalize_key("Leafy Green"), "leafy green");
    }
}
