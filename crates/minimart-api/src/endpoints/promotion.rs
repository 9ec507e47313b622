//! # Promotion Endpoints

use tracing::debug;

use minimart_core::types::Promotion;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::dto::PromotionDto;
use crate::error::ApiResult;

/// Promotion catalog operations.
#[derive(Debug, Clone)]
pub struct PromotionsApi {
    client: ApiClient,
}

impl PromotionsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        PromotionsApi { client }
    }

    /// Lists promotions currently offered, for the POS dropdown.
    ///
    /// The backend filters to the active window; scope and minimum-order
    /// eligibility are evaluated per cart by the pricing engine.
    pub async fn list_active(&self) -> ApiResult<Vec<Promotion>> {
        let dtos: Vec<PromotionDto> = self
            .client
            .get_json(endpoints::PROMOTIONS, &[("isActive", "true")])
            .await?;

        let promotions: Vec<Promotion> = dtos.into_iter().map(Promotion::from).collect();
        debug!(count = promotions.len(), "loaded active promotions");
        Ok(promotions)
    }
}
