//! # Confirm Payment Flow
//!
//! The one place where the pure session meets the network: validate the
//! tender, build the payload, book the invoice, then reset the sale. The
//! session is only cleared after the backend accepts; a rejected invoice
//! leaves the cart intact for the cashier to retry.

use thiserror::Error;
use tracing::info;

use minimart_core::checkout::CheckoutSession;
use minimart_core::error::CoreError;
use minimart_core::money::Money;

use crate::client::ApiClient;
use crate::dto::InvoiceReceipt;
use crate::error::ApiError;

/// Failures of the confirm-payment flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The sale itself is not submittable (empty cart, short cash tender,
    /// invalid input). User-correctable; nothing was sent.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backend rejected or never received the invoice. The session is
    /// untouched and the submission can be retried.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Books the current sale as an invoice.
///
/// On success the session is reset for the next customer (cart and manual
/// discount cleared, promotion/tax selections kept). On any error the
/// session state is exactly as before the call.
pub async fn confirm_payment(
    client: &ApiClient,
    session: &mut CheckoutSession,
    received: Money,
) -> Result<InvoiceReceipt, CheckoutError> {
    let draft = session.build_invoice(received)?;
    let receipt = client.sales().create(&draft).await?;

    info!(
        reference = receipt.reference().as_deref().unwrap_or("-"),
        change = %session.change_due(received),
        "payment confirmed"
    );

    session.complete();
    Ok(receipt)
}
