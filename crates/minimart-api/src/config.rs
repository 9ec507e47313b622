//! # API Configuration
//!
//! Base URL, endpoint paths and the session token. The endpoint table
//! mirrors the backend's REST routes; paths with an `:id` placeholder are
//! filled through [`with_id`].

use serde::{Deserialize, Serialize};

/// REST endpoint paths, relative to the base URL.
pub mod endpoints {
    pub const PRODUCTS: &str = "/api/products";
    pub const PRODUCT_BY_ID: &str = "/api/products/:id";
    pub const PROMOTIONS: &str = "/api/promotions";
    pub const TAXES: &str = "/api/taxes";
    pub const SALES: &str = "/api/sales";
}

/// Substitutes the `:id` placeholder in an endpoint path.
pub(crate) fn with_id(endpoint: &str, id: i64) -> String {
    endpoint.replace(":id", &id.to_string())
}

/// Connection settings for the backend.
///
/// The token is whatever the login flow produced; storing and refreshing
/// it is the caller's concern (the browser app keeps it in its own
/// storage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://localhost:7158`.
    pub base_url: String,

    /// Bearer token attached to every request when present.
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Creates a config without a token (public endpoints only).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ApiConfig {
            base_url,
            auth_token: None,
        }
    }

    /// Attaches a session token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let config = ApiConfig::new("https://localhost:7158/");
        assert_eq!(
            config.url(endpoints::PRODUCTS),
            "https://localhost:7158/api/products"
        );
    }

    #[test]
    fn test_id_substitution() {
        assert_eq!(with_id(endpoints::PRODUCT_BY_ID, 42), "/api/products/42");
    }

    #[test]
    fn test_token_attachment() {
        let config = ApiConfig::new("http://x").with_token("abc");
        assert_eq!(config.auth_token.as_deref(), Some("abc"));
    }
}
