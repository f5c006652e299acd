//! Field metadata types
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::validation::ValidationRules;

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Wire name, also used in error messages
    pub name: &'static str,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub fn label(&self) -> &'static str {
        self.ui.label
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
        }
    }

    pub const fn with_placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }
}
