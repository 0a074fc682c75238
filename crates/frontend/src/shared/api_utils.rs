//! API utilities for dashboard-to-API communication
//!
//! Provides helper functions for constructing API URLs.

use crate::config::API_PORT;

/// Get the base URL for API requests
///
/// A base baked in at build time through `DASHBOARD_API_BASE` wins.
/// Otherwise the base is derived from the current window location,
/// using [`API_PORT`] for the API server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("DASHBOARD_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```ignore
/// let url = api_url("/api/auth/me");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
