use contracts::system::auth::{RefreshRequest, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("system/auth/logout"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
