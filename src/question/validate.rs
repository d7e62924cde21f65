//! Post-conversion validation.
//!
//! A validator runs strictly after a successful read and either accepts the
//! typed value or rejects it with a message shown verbatim to the user.
//! Rejection re-prompts the same question; it is never a command failure.

use std::fmt;

use regex::Regex;

use crate::error::{GantryError, Result};

const PACKAGE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$";
const CLASS_NAME_PATTERN: &str = r"^[A-Z][A-Za-z0-9_]*$";

/// Acceptance check for a converted answer value.
pub struct Validator<T> {
    check: Box<dyn Fn(&T) -> std::result::Result<(), String>>,
}

impl<T> Validator<T> {
    /// Build a validator from a predicate returning a rejection message.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<(), String> + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }

    /// A validator that accepts every value.
    pub fn accept_all() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Run the check.
    pub fn validate(&self, value: &T) -> std::result::Result<(), String> {
        (self.check)(value)
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator(..)")
    }
}

/// Validator rejecting any string that does not match `pattern`.
///
/// The message is shown verbatim on rejection. Fails at construction time if
/// the pattern does not compile.
pub fn regex_validator(pattern: &str, message: &str) -> Result<Validator<String>> {
    let regex = Regex::new(pattern).map_err(|e| GantryError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let message = message.to_string();
    Ok(Validator::new(move |value: &String| {
        if regex.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    }))
}

/// Validator for package-style dotted identifiers, e.g. `com.example.shop`.
pub fn package_name_validator() -> Result<Validator<String>> {
    regex_validator(
        PACKAGE_NAME_PATTERN,
        "Invalid package name (expected dotted lowercase identifiers, e.g. com.example.app)",
    )
}

/// Validator for class-style capitalized identifiers, e.g. `Customer`.
pub fn class_name_validator() -> Result<Validator<String>> {
    regex_validator(
        CLASS_NAME_PATTERN,
        "Invalid class name (expected a capitalized identifier, e.g. Customer)",
    )
}
