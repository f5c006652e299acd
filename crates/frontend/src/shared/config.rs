use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit base URL, e.g. "https://hr.example.com:8443"
    #[serde(default)]
    pub base: Option<String>,
    /// Port used when the base URL is derived from the window location
    pub port: u16,
    pub path_prefix: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
path_prefix = "/api"
"#;

/// localStorage key that overrides `api.base` at runtime
pub const API_BASE_STORAGE_KEY: &str = "api_base";

/// Parse a configuration document
pub fn parse_config(contents: &str) -> Result<ClientConfig, String> {
    toml::from_str(contents).map_err(|e| format!("Invalid client config: {}", e))
}

/// Load the client configuration
///
/// Search order:
/// 1. `api_base` in localStorage (base URL only)
/// 2. Embedded default config
pub fn load_config() -> ClientConfig {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            ClientConfig {
                api: ApiConfig {
                    base: None,
                    port: 3000,
                    path_prefix: "/api".to_string(),
                },
            }
        }
    };

    if let Some(base) = stored_api_base() {
        log::debug!("Using API base from localStorage: {}", base);
        config.api.base = Some(base);
    }

    config
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(API_BASE_STORAGE_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}

impl ApiConfig {
    /// Resolve the base URL; `location` is `(protocol, hostname)` of the page
    pub fn resolve_base(&self, location: Option<(String, String)>) -> String {
        if let Some(base) = &self.base {
            return base.trim_end_matches('/').to_string();
        }
        match location {
            Some((protocol, hostname)) => format!("{}//{}:{}", protocol, hostname, self.port),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.path_prefix, "/api");
        assert_eq!(config.api.base, None);
    }

    #[test]
    fn test_explicit_base_wins() {
        let config = parse_config(
            r#"
[api]
base = "https://hr.example.com/"
port = 8080
path_prefix = "/api"
"#,
        )
        .unwrap();
        let base = config
            .api
            .resolve_base(Some(("http:".to_string(), "localhost".to_string())));
        assert_eq!(base, "https://hr.example.com");
    }

    #[test]
    fn test_base_from_location() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let base = config
            .api
            .resolve_base(Some(("https:".to_string(), "hr.local".to_string())));
        assert_eq!(base, "https://hr.local:3000");
        assert_eq!(config.api.resolve_base(None), "");
    }

    #[test]
    fn test_invalid_config_is_reported() {
        assert!(parse_config("[api]\nport = \"x\"").is_err());
    }
}
