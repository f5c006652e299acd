use serde::{Deserialize, Serialize};

/// Request body for revoking a refresh token on logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Currently signed-in user, as returned by the session endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// Name shown in the page header
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"1","username":"hr","full_name":null,"email":null}"#)
                .unwrap();
        assert_eq!(user.display_name(), "hr");
        assert!(!user.is_admin);
    }
}
