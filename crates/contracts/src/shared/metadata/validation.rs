//! Validation rules for metadata fields

use std::num::IntErrorKind;

use thiserror::Error;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Value must be a whole number greater than zero
    pub positive_integer: bool,
    pub max_length: Option<usize>,
    /// Accept display formatting ("Rp.1,000") before parsing a number
    pub coerce_display: bool,
    pub one_of: Option<&'static [&'static str]>,
    pub media_types: Option<&'static [&'static str]>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            positive_integer: false,
            max_length: None,
            coerce_display: false,
            one_of: None,
            media_types: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn positive_integer(self) -> Self {
        Self {
            positive_integer: true,
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn coerce_display(self) -> Self {
        Self {
            coerce_display: true,
            ..self
        }
    }

    pub const fn one_of(self, values: &'static [&'static str]) -> Self {
        Self {
            one_of: Some(values),
            ..self
        }
    }

    pub const fn media_types(self, types: &'static [&'static str], error: &'static str) -> Self {
        Self {
            media_types: Some(types),
            custom_error: Some(error),
            ..self
        }
    }

    /// Validate a free-text value. Empty text counts as absent.
    pub fn validate_string(&self, value: &str, field: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(required_message(field));
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("{} must be at most {} characters", field, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric text input and return the parsed value.
    ///
    /// `Ok(None)` means the input was empty and the field is optional.
    pub fn validate_number(&self, raw: &str, field: &str) -> Result<Option<i64>, String> {
        let cleaned = if self.coerce_display {
            strip_display_formatting(raw)
        } else {
            raw.trim().to_string()
        };

        if cleaned.is_empty() {
            return if self.required {
                Err(required_message(field))
            } else {
                Ok(None)
            };
        }

        let value = match cleaned.parse::<i64>() {
            Ok(v) => v,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                return Err(format!("{} is too large", field));
            }
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                return Err(positive_message(field));
            }
            Err(_) => match cleaned.parse::<f64>() {
                Ok(f) if f.is_finite() => {
                    if f <= 0.0 {
                        return Err(positive_message(field));
                    }
                    return Err(format!("{} must be an integer", field));
                }
                _ => return Err(format!("{} must be a number", field)),
            },
        };

        self.validate_id(Some(value), field)
    }

    /// Validate an identifier picked from a reference list.
    pub fn validate_id(&self, value: Option<i64>, field: &str) -> Result<Option<i64>, String> {
        match value {
            None if self.required => Err(required_message(field)),
            None => Ok(None),
            Some(v) if self.positive_integer && v <= 0 => Err(positive_message(field)),
            Some(v) => Ok(Some(v)),
        }
    }

    /// Validate an enumerated tag against the allowed value set.
    pub fn validate_tag(&self, value: Option<&str>, field: &str) -> Result<(), String> {
        let Some(value) = value else {
            return if self.required {
                Err(required_message(field))
            } else {
                Ok(())
            };
        };

        match self.one_of {
            Some(allowed) if !allowed.contains(&value) => Err(format!(
                "{} must be one of the following values: {}",
                field,
                allowed.join(", ")
            )),
            _ => Ok(()),
        }
    }

    /// Validate the declared media type of an attached file.
    pub fn validate_media_type(&self, media_type: Option<&str>, field: &str) -> Result<(), String> {
        let Some(media_type) = media_type else {
            return if self.required {
                Err(required_message(field))
            } else {
                Ok(())
            };
        };

        match self.media_types {
            Some(allowed) if !allowed.contains(&media_type) => Err(self
                .custom_error
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} has an unsupported media type", field))),
            _ => Ok(()),
        }
    }
}

fn required_message(field: &str) -> String {
    format!("{} is a required field", field)
}

fn positive_message(field: &str) -> String {
    format!("{} must be a positive number", field)
}

/// Remove the currency prefix, thousands separators and whitespace that the
/// masked inputs add for display.
pub fn strip_display_formatting(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_prefix = trimmed.strip_prefix("Rp.").unwrap_or(trimmed);
    without_prefix
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

// ============================================================================
// Errors
// ============================================================================

/// Single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered set of rule violations collected in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("there were {} errors", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message reported for `field`
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message.clone()).collect()
    }

    /// Drop every message reported for `field`
    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|e| e.field != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required().max_length(5);
        assert_eq!(
            rules.validate_string("", "name"),
            Err("name is a required field".to_string())
        );
        assert_eq!(
            rules.validate_string("   ", "name"),
            Err("name is a required field".to_string())
        );
        assert!(rules.validate_string("Ann", "name").is_ok());
        assert_eq!(
            rules.validate_string("Annabel", "name"),
            Err("name must be at most 5 characters".to_string())
        );
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules::none().max_length(3);
        assert!(rules.validate_string("äöü", "city").is_ok());
        assert!(rules.validate_string("", "city").is_ok());
    }

    #[test]
    fn test_number_parsing() {
        let rules = ValidationRules::none().positive_integer();
        assert_eq!(rules.validate_number("", "weight"), Ok(None));
        assert_eq!(rules.validate_number(" 70 ", "weight"), Ok(Some(70)));
        assert_eq!(
            rules.validate_number("0", "weight"),
            Err("weight must be a positive number".to_string())
        );
        assert_eq!(
            rules.validate_number("-3", "weight"),
            Err("weight must be a positive number".to_string())
        );
        assert_eq!(
            rules.validate_number("1.5", "weight"),
            Err("weight must be an integer".to_string())
        );
        assert_eq!(
            rules.validate_number("abc", "weight"),
            Err("weight must be a number".to_string())
        );
    }

    #[test]
    fn test_number_out_of_range() {
        let rules = ValidationRules::required().positive_integer().coerce_display();
        assert_eq!(
            rules.validate_number("99999999999999999999", "wages"),
            Err("wages is too large".to_string())
        );
        assert_eq!(
            rules.validate_number("Rp.99,999,999,999,999,999,999", "wages"),
            Err("wages is too large".to_string())
        );
        assert_eq!(
            rules.validate_number("-99999999999999999999", "wages"),
            Err("wages must be a positive number".to_string())
        );
        assert_eq!(
            rules.validate_number("9223372036854775807", "wages"),
            Ok(Some(i64::MAX))
        );
    }

    #[test]
    fn test_display_coercion() {
        assert_eq!(strip_display_formatting("Rp.1,000,000"), "1000000");
        assert_eq!(strip_display_formatting(" 2,500 "), "2500");
        assert_eq!(strip_display_formatting("Rp."), "");

        let rules = ValidationRules::required().positive_integer().coerce_display();
        assert_eq!(rules.validate_number("1,000", "wages"), Ok(Some(1000)));
        assert_eq!(
            rules.validate_number("Rp.", "wages"),
            Err("wages is a required field".to_string())
        );
    }

    #[test]
    fn test_tag_and_media_type() {
        let rules = ValidationRules::none().one_of(&["male", "female"]);
        assert!(rules.validate_tag(None, "gender").is_ok());
        assert!(rules.validate_tag(Some("female"), "gender").is_ok());
        assert_eq!(
            rules.validate_tag(Some("other"), "gender"),
            Err("gender must be one of the following values: male, female".to_string())
        );

        let rules = ValidationRules::none().media_types(&["image/jpeg"], "Unsupported Format");
        assert!(rules.validate_media_type(None, "image").is_ok());
        assert!(rules.validate_media_type(Some("image/jpeg"), "image").is_ok());
        assert_eq!(
            rules.validate_media_type(Some("image/png"), "image"),
            Err("Unsupported Format".to_string())
        );
    }

    #[test]
    fn test_error_set() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.push("name", "name is a required field");
        errors.push("wages", "wages is a required field");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_for("wages"), Some("wages is a required field"));
        assert_eq!(errors.message_for("city"), None);
        assert_eq!(errors.to_string(), "there were 2 errors");

        errors.clear_field("name");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("name"), None);
    }
}
