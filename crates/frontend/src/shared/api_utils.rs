//! API utilities for frontend-backend communication
//!
//! The page talks to its own origin; the dev server (see `Trunk.toml`) or a
//! reverse proxy forwards `/api/` to the analysis backend.

/// Base URL prepended to API paths. Empty means same origin.
pub const API_BASE: &str = "";

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// let url = whytx_frontend::shared::api_utils::api_url("/api/analyze");
/// assert_eq!(url, "/api/analyze");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}
