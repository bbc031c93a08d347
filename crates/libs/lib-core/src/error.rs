//! # Error Types
//!
//! The site has two kinds of failure, both handled where they happen:
//!
//! - [`ConnectionError`]: a wallet connect attempt failed. The wallet status control turns
//!   it into a destructive toast.
//! - [`ValidationErrors`]: one or more form fields were rejected by a step schema. The form
//!   shows each message under its field.
//!
//! [`WizardError`] wraps validation failures together with the transitions the
//! registration wizard refuses. None of these are fatal.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::ValidationErrors;
//!
//! let mut errors = ValidationErrors::new();
//! errors.insert("email", "Please enter a valid email address");
//!
//! assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
//! assert_eq!(errors.get("phoneNumber"), None);
//! assert!(errors.into_result(()).is_err());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A wallet connect attempt failed. The connection state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The wallet refused the request (user declined, locked wallet).
    #[error("Wallet rejected the connection: {0}")]
    Rejected(String),

    /// No wallet could be reached.
    #[error("Wallet unavailable: {0}")]
    Unavailable(String),
}

/// Field name (camelCase, as the form names it) to error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "{} field(s) failed validation: {}", fields.len(), fields.join(", "))
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`. The first message recorded for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Keeps the first message of each field, renamed to the form's camelCase field name.
/// Rules without a message report their code.
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = ValidationErrors::new();
        for (field, field_errors) in errors.field_errors() {
            if let Some(error) = field_errors.first() {
                let message = error.message.as_deref().unwrap_or(&*error.code);
                out.insert(camel_case(&field), message);
            }
        }
        out
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// A registration wizard transition was refused. The step is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The step's values did not pass its schema.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Values for a step other than the current one were submitted.
    #[error("Step {submitted} submitted while on step {current}")]
    OutOfStep { current: u8, submitted: u8 },

    /// `next` was called on the last step; the last step is left with `submit`.
    #[error("The final step must be submitted, not advanced")]
    FinalStep,

    /// The registration dialog is closed.
    #[error("Registration dialog is closed")]
    Closed,
}

impl WizardError {
    /// Field errors to show inline, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            WizardError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.insert("country", "Please select a country");
        errors.insert("country", "something else");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("country"), Some("Please select a country"));
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert("taxId", "x");
        errors.insert("blockchain", "y");
        assert_eq!(errors.to_string(), "2 field(s) failed validation: blockchain, taxId");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
    }

    #[test]
    fn test_from_validator_errors() {
        let mut source = validator::ValidationErrors::new();
        source.add(
            "primary_contact_name",
            validator::ValidationError::new("length")
                .with_message("Contact name must be at least 2 characters".into()),
        );
        source.add("tax_country", validator::ValidationError::new("tax_country"));

        let errors = ValidationErrors::from(source);
        assert_eq!(
            errors.get("primaryContactName"),
            Some("Contact name must be at least 2 characters")
        );
        assert_eq!(errors.get("taxCountry"), Some("tax_country"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("business_address"), "businessAddress");
        assert_eq!(camel_case("email"), "email");
    }

    #[test]
    fn test_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.insert("email", "bad");
        let err = WizardError::from(errors.clone());
        assert_eq!(err.field_errors(), Some(&errors));
        assert_eq!(WizardError::Closed.field_errors(), None);
    }
}
