//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::site_config;

/// Get the base URL for API requests
///
/// Comes from the embedded site configuration (see `shared::config`).
///
/// # Example
/// ```ignore
/// let url = format!("{}/reviews/stats", api_base());
/// ```
pub fn api_base() -> &'static str {
    &site_config().api.base_url
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path relative to the base (should start with "/")
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3001/api", "/reviews"),
            "http://localhost:3001/api/reviews"
        );
        assert_eq!(
            join_url("http://localhost:3001/api/", "reviews/stats"),
            "http://localhost:3001/api/reviews/stats"
        );
    }
}
