//! Input validation for user-entered form fields.
//!
//! All validators share the [`Validator`] trait so they can be composed at
//! the form layer. The checks are plain character-class scans; no regular
//! expression engine is involved.

use thiserror::Error;

/// Core validation trait implemented by all validators.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email address: {0}")]
    Email(String),
    #[error("invalid phone number: {0}")]
    Phone(String),
    #[error("invalid ID number: {0}")]
    IdNumber(String),
}

/// Validator for email addresses: one `@`, a non-empty local part, and a
/// dotted domain whose final label is at least two letters.
pub struct EmailValidator;

impl Validator<str> for EmailValidator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let fail = || ValidationError::Email(input.to_string());

        let (local, domain) = input.split_once('@').ok_or_else(fail)?;
        if local.is_empty() || domain.contains('@') {
            return Err(fail());
        }
        if !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
        {
            return Err(fail());
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(fail());
        }
        for label in &labels {
            if label.is_empty()
                || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                return Err(fail());
            }
        }
        let tld = labels[labels.len() - 1];
        if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(fail());
        }

        Ok(())
    }
}

/// Validator for CN mobile numbers: 11 digits, `1` followed by `3`-`9`.
pub struct PhoneValidator;

impl Validator<str> for PhoneValidator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let bytes = input.as_bytes();
        let valid = bytes.len() == 11
            && bytes[0] == b'1'
            && (b'3'..=b'9').contains(&bytes[1])
            && input.chars().all(|c| c.is_ascii_digit());
        if valid {
            Ok(())
        } else {
            Err(ValidationError::Phone(input.to_string()))
        }
    }
}

/// Validator for resident ID numbers: 15 digits, 18 digits, or 17 digits
/// followed by a digit or `X`/`x`.
pub struct IdNumberValidator;

impl Validator<str> for IdNumberValidator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let bytes = input.as_bytes();
        let valid = match bytes.len() {
            15 => bytes.iter().all(u8::is_ascii_digit),
            18 => {
                bytes[..17].iter().all(u8::is_ascii_digit)
                    && matches!(bytes[17], b'0'..=b'9' | b'X' | b'x')
            }
            _ => false,
        };
        if valid {
            Ok(())
        } else {
            Err(ValidationError::IdNumber(input.to_string()))
        }
    }
}
