//! # API Client
//!
//! The shared HTTP handle. One `ApiClient` per backend; endpoint groups
//! (`products()`, `promotions()`, `taxes()`, `sales()`) borrow it the way
//! screens share one fetch configuration.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  caller ──► endpoint group ──► get_json/post_json                   │
//! │                                   │                                 │
//! │                                   ├── attach Authorization: Bearer  │
//! │                                   ├── send                          │
//! │                                   └── status?                       │
//! │                                        2xx ── decode DTO            │
//! │                                        401 ── ApiError::Unauthorized│
//! │                                        else ─ ApiError::Backend     │
//! │                                               (message from body)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::endpoints::{ProductsApi, PromotionsApi, SalesApi, TaxesApi};
use crate::error::{ApiError, ApiResult};

/// HTTP client for the Minimart backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: ApiConfig) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Endpoint groups
    // -------------------------------------------------------------------------

    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    pub fn promotions(&self) -> PromotionsApi {
        PromotionsApi::new(self.clone())
    }

    pub fn taxes(&self) -> TaxesApi {
        TaxesApi::new(self.clone())
    }

    pub fn sales(&self) -> SalesApi {
        SalesApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Request plumbing
    // -------------------------------------------------------------------------

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.config.url(endpoint);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self.authorize(request).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body, expecting a JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.config.url(endpoint);
        debug!(%url, "POST");

        let request = self.http.post(&url).json(body);
        let response = self.authorize(request).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        match status {
            s if s.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::backend(status.as_u16(), &body))
            }
        }
    }
}
