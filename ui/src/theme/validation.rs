use crate::error::AppError;
use crate::theme::types::{Theme, parse_hex_color};
use crate::validation::Validator;

/// Validation errors specific to theme definitions
#[derive(Debug, Clone)]
pub enum ThemeValidationError {
    MissingName,
    InvalidColor {
        role: String,
        value: String,
        reason: String,
    },
    EmptyGradient {
        role: String,
    },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::MissingName => {
                "Theme definition is missing a display name.".to_string()
            }
            ThemeValidationError::InvalidColor { role, value, reason } => {
                format!(
                    "Invalid color for role '{role}': '{value}'\n\n\
                    Reason: {reason}\n\n\
                    Colors must be #rrggbb hex values."
                )
            }
            ThemeValidationError::EmptyGradient { role } => {
                format!("Gradient role '{role}' must not be empty.")
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Config(error.user_message())
    }
}

/// Validator for a single color value
pub struct HexColorValidator;

impl Validator<str> for HexColorValidator {
    type Error = &'static str;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err("color value is empty");
        }
        parse_hex_color(input).map(|_| ())
    }
}

/// Validator for a complete theme definition. The serde shape already
/// guarantees every color and gradient role is present; this checks the
/// values themselves.
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Theme) -> Result<(), Self::Error> {
        if input.name.trim().is_empty() {
            return Err(ThemeValidationError::MissingName);
        }

        let color_validator = HexColorValidator;
        for (role, value) in input.colors.entries() {
            color_validator
                .validate(value)
                .map_err(|reason| ThemeValidationError::InvalidColor {
                    role: role.to_string(),
                    value: value.to_string(),
                    reason: reason.to_string(),
                })?;
        }

        for (role, value) in input.gradients.entries() {
            if value.trim().is_empty() {
                return Err(ThemeValidationError::EmptyGradient {
                    role: role.to_string(),
                });
            }
        }

        Ok(())
    }
}
