use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Success body of the create-employee endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatus {
    pub message: String,
}

/// Error list as the server sends it: keyed by field or flat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorList {
    ByField(BTreeMap<String, Vec<String>>),
    Flat(Vec<String>),
}

/// Rejection body of the create-employee and lookup endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<ErrorList>,
}

impl ErrorBody {
    /// Flatten into the user-visible error list.
    ///
    /// Falls back to the top-level message when no per-field errors exist.
    pub fn into_messages(self) -> Vec<String> {
        let messages: Vec<String> = match self.errors {
            Some(ErrorList::ByField(map)) => map.into_values().flatten().collect(),
            Some(ErrorList::Flat(list)) => list,
            None => Vec::new(),
        };

        if messages.is_empty() {
            self.message.into_iter().collect()
        } else {
            messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_flatten() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"message":"The given data was invalid.","errors":{"name":["The name has already been taken."],"phone":["Too long.","Digits only."]}}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_messages(),
            vec!["The name has already been taken.", "Too long.", "Digits only."]
        );
    }

    #[test]
    fn test_flat_errors() {
        let body: ErrorBody = serde_json::from_str(r#"{"errors":["Server down"]}"#).unwrap();
        assert_eq!(body.into_messages(), vec!["Server down"]);
    }

    #[test]
    fn test_message_only() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Unauthenticated."}"#).unwrap();
        assert_eq!(body.into_messages(), vec!["Unauthenticated."]);
        assert!(ErrorBody::default().into_messages().is_empty());
    }
}
