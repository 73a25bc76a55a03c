//! API utilities for frontend-backend communication
//!
//! Resolves the API base URL from configuration and the page location.

use super::config::{config, ApiConfig};

/// Get the base URL for API requests
///
/// An explicit `api.base_url` from configuration wins. Otherwise the base is
/// derived from the current window location on the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://api.example.com"
/// - Empty string if neither is available
pub fn api_base() -> String {
    resolve_api_base(&config().api, page_origin())
}

/// Protocol and hostname of the page, if running in a browser window
fn page_origin() -> Option<(String, String)> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some((protocol, hostname))
}

pub fn resolve_api_base(api: &ApiConfig, origin: Option<(String, String)>) -> String {
    let explicit = api.base_url.trim().trim_end_matches('/');
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    match origin {
        Some((protocol, hostname)) => format!("{}//{}:{}", protocol, hostname, api.port),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_drops_trailing_slash() {
        let api = ApiConfig {
            base_url: "https://api.example.com/".into(),
            port: 3000,
        };
        assert_eq!(
            resolve_api_base(&api, Some(("http:".into(), "localhost".into()))),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_base_derived_from_location() {
        let api = ApiConfig::default();
        assert_eq!(
            resolve_api_base(&api, Some(("https:".into(), "shop.local".into()))),
            "https://shop.local:3000"
        );
        assert_eq!(resolve_api_base(&api, None), "");
    }
}
