//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and request headers.

use super::config::load_config;

/// Get the base URL for API requests
///
/// Uses the configured base when present, otherwise derives it from the
/// current window location and the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let config = load_config();
    let location = web_sys::window().map(|window| {
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        (protocol, hostname)
    });
    config.api.resolve_base(location)
}

/// Build a full API URL from a path below the API prefix
///
/// # Example
/// ```rust,ignore
/// let url = api_url("employees"); // http://host:3000/api/employees
/// ```
pub fn api_url(path: &str) -> String {
    let config = load_config();
    join_url(&api_base(), &config.api.path_prefix, path)
}

fn join_url(base: &str, prefix: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        prefix.trim_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Value for the `Authorization` header, if a session token is stored
pub fn bearer_header() -> Option<String> {
    crate::system::auth::storage::get_access_token().map(|token| format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api", "employees"),
            "http://localhost:3000/api/employees"
        );
        assert_eq!(
            join_url("http://localhost:3000/", "api/", "/grades"),
            "http://localhost:3000/api/grades"
        );
    }
}
