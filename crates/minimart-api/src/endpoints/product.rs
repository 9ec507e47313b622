//! # Product Endpoints

use tracing::debug;

use minimart_core::types::Product;

use crate::client::ApiClient;
use crate::config::{endpoints, with_id};
use crate::dto::ProductDto;
use crate::error::ApiResult;

/// Catalog product operations.
#[derive(Debug, Clone)]
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        ProductsApi { client }
    }

    /// Lists sellable products for the POS grid.
    ///
    /// Requests `?isActive=true` and re-filters the response anyway: the
    /// backend has been observed returning soft-deleted records on this
    /// query, and an inactive product must never reach the cart.
    pub async fn list_active(&self) -> ApiResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self
            .client
            .get_json(endpoints::PRODUCTS, &[("isActive", "true")])
            .await?;

        let products: Vec<Product> = dtos
            .into_iter()
            .map(Product::from)
            .filter(|p| p.is_active)
            .collect();

        debug!(count = products.len(), "loaded active products");
        Ok(products)
    }

    /// Fetches a single product by id.
    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        let dto: ProductDto = self
            .client
            .get_json(&with_id(endpoints::PRODUCT_BY_ID, id), &[])
            .await?;
        Ok(Product::from(dto))
    }
}
