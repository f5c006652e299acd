//! Common types shared by all forms

pub mod choice;

// Re-exports
pub use choice::{Choice, ChoiceKey, ReferenceItem};
