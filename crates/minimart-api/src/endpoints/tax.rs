//! # Tax Endpoints

use tracing::debug;

use minimart_core::types::Tax;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::dto::TaxDto;
use crate::error::ApiResult;

/// Tax catalog operations.
#[derive(Debug, Clone)]
pub struct TaxesApi {
    client: ApiClient,
}

impl TaxesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        TaxesApi { client }
    }

    /// Lists active taxes. The POS preselects the first entry as the
    /// default checkout tax; the cashier can switch or clear it.
    pub async fn list_active(&self) -> ApiResult<Vec<Tax>> {
        let dtos: Vec<TaxDto> = self
            .client
            .get_json(endpoints::TAXES, &[("isActive", "true")])
            .await?;

        let taxes: Vec<Tax> = dtos.into_iter().map(Tax::from).collect();
        debug!(count = taxes.len(), "loaded active taxes");
        Ok(taxes)
    }
}
