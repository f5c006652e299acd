use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Choice key
// ============================================================================

/// Identifier carried by a selectable option.
///
/// Reference-data options are addressed by numeric id, enumerated options
/// (gender, blood group) by a fixed string tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceKey {
    Id(i64),
    Tag(String),
}

impl ChoiceKey {
    pub fn as_id(&self) -> Option<i64> {
        match self {
            ChoiceKey::Id(id) => Some(*id),
            ChoiceKey::Tag(_) => None,
        }
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            ChoiceKey::Id(_) => None,
            ChoiceKey::Tag(tag) => Some(tag),
        }
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceKey::Id(id) => write!(f, "{}", id),
            ChoiceKey::Tag(tag) => f.write_str(tag),
        }
    }
}

// ============================================================================
// Choice
// ============================================================================

/// Selectable combobox option: identifier plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub key: ChoiceKey,
    pub name: String,
}

impl Choice {
    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            key: ChoiceKey::Id(id),
            name: name.into(),
        }
    }

    pub fn with_tag(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: ChoiceKey::Tag(tag.into()),
            name: name.into(),
        }
    }
}

/// Reference-data entry as delivered by the lookup endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
}

impl From<ReferenceItem> for Choice {
    fn from(item: ReferenceItem) -> Self {
        Choice::with_id(item.id, item.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_item_becomes_id_choice() {
        let item: ReferenceItem = serde_json::from_str(r#"{"id": 7, "name": "Finance"}"#).unwrap();
        let choice = Choice::from(item);
        assert_eq!(choice.key.as_id(), Some(7));
        assert_eq!(choice.name, "Finance");
    }

    #[test]
    fn key_display_matches_wire_value() {
        assert_eq!(ChoiceKey::Id(12).to_string(), "12");
        assert_eq!(ChoiceKey::Tag("AB".into()).to_string(), "AB");
        assert_eq!(ChoiceKey::Tag("male".into()).as_id(), None);
    }
}
