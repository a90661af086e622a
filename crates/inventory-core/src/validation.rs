//! # Validation Module
//!
//! Input validation utilities for the inventory service.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler                                                 │
//! │  ├── Form decoding (all fields arrive as text)                         │
//! │  └── parse_id / parse_cost turn text into typed values                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Drafts (types.rs)                                            │
//! │  └── THIS MODULE: required fields, email pattern, cost range           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{validate_email, validate_required};
//!
//! validate_required("name", "Jane Doe").unwrap();
//! validate_email("jane@example.com").unwrap();
//! assert!(validate_email("jane.example.com").is_err());
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};
use crate::EMAIL_PATTERN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is not empty.
///
/// Whitespace-only values count as empty.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(())
}

/// Validates an email address against [`EMAIL_PATTERN`].
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_email;
///
/// assert!(validate_email("jane.doe@mail.example.com").is_ok());
/// assert!(validate_email("jane@localhost").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !email_regex().is_match(email) {
        return Err(ValidationError::invalid_format(
            "email",
            "must look like name@domain.tld using letters, digits, '-', '_' and '.'",
        ));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the cost of a good.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
pub fn validate_cost(cost: Money) -> ValidationResult<()> {
    if cost.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a foreign-key id (must be a positive row id).
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Form Parsers
// =============================================================================

/// Parses an id that arrived as form text.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::parse_id;
///
/// assert_eq!(parse_id("good_id", " 3 ").unwrap(), 3);
/// assert!(parse_id("good_id", "").is_err());
/// assert!(parse_id("good_id", "three").is_err());
/// ```
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::required(field));
    }

    let id: i64 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, "must be a whole number"))?;
    validate_id(field, id)?;

    Ok(id)
}

/// Parses a cost that arrived as form text.
pub fn parse_cost(raw: &str) -> ValidationResult<Money> {
    let cost: Money = raw.parse().map_err(|e: ParseMoneyError| match e {
        ParseMoneyError::Empty => ValidationError::required("cost"),
        other => ValidationError::invalid_format("cost", other.to_string()),
    })?;
    validate_cost(cost)?;

    Ok(cost)
}

// =============================================================================
// Unit Tests
// =============================================================================
