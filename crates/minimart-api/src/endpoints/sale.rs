//! # Sale Endpoints

use tracing::{debug, info};

use minimart_core::checkout::InvoiceDraft;
use minimart_core::types::SaleSummary;

use crate::client::ApiClient;
use crate::config::endpoints;
use crate::dto::{InvoiceReceipt, SaleSummaryDto};
use crate::error::ApiResult;

/// Invoice booking and sale listings.
#[derive(Debug, Clone)]
pub struct SalesApi {
    client: ApiClient,
}

impl SalesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        SalesApi { client }
    }

    /// Books an invoice. The payload carries the manual discount and raw
    /// lines only; the backend recomputes promotion and tax amounts from
    /// its own rules (see [`InvoiceDraft`]).
    pub async fn create(&self, draft: &InvoiceDraft) -> ApiResult<InvoiceReceipt> {
        let receipt: InvoiceReceipt = self.client.post_json(endpoints::SALES, draft).await?;

        info!(
            reference = receipt.reference().as_deref().unwrap_or("-"),
            paid = %draft.paid_amount,
            lines = draft.details.len(),
            "invoice booked"
        );
        Ok(receipt)
    }

    /// Lists completed sales for the reports screen, newest first as the
    /// backend orders them.
    pub async fn list_recent(&self) -> ApiResult<Vec<SaleSummary>> {
        let dtos: Vec<SaleSummaryDto> = self.client.get_json(endpoints::SALES, &[]).await?;

        let sales: Vec<SaleSummary> = dtos.into_iter().map(SaleSummary::from).collect();
        debug!(count = sales.len(), "loaded recent sales");
        Ok(sales)
    }
}
