//! Field metadata for describing form schemas
//!
//! Each form declares its fields as `'static` [`FieldMetadata`] constants.
//! Labels feed the UI, [`ValidationRules`] feed the validator.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_employee::metadata::NAME;
//!
//! let rules = NAME.validation;
//! rules.validate_string("Jane", NAME.name)?;
//! ```

mod types;
mod validation;

pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::{strip_display_formatting, FieldError, ValidationErrors, ValidationRules};
