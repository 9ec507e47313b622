//! # minimart-api: Remote Backend Data Layer
//!
//! This crate owns every HTTP call the POS makes and every wire-format
//! concern: endpoint paths, bearer authentication, DTO shapes, and the
//! normalization of the backend's loose records into the canonical types
//! of `minimart-core`.
//!
//! ## Module Organization
//!
//! - [`config`] - Base URL, endpoint table, session token
//! - [`client`] - The shared reqwest handle and request plumbing
//! - [`dto`] - Wire DTOs and their normalization into core types
//! - [`endpoints`] - Products, promotions, taxes, sales
//! - [`checkout`] - The confirm-payment flow (session + network)
//! - [`error`] - API error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use minimart_api::{ApiClient, ApiConfig};
//! use minimart_api::checkout::confirm_payment;
//! use minimart_core::checkout::CheckoutSession;
//! use minimart_core::money::Money;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(
//!     ApiConfig::new("https://localhost:7158").with_token("eyJhbGci..."),
//! );
//!
//! let products = client.products().list_active().await?;
//! let taxes = client.taxes().list_active().await?;
//!
//! let mut session = CheckoutSession::new();
//! session.select_tax(taxes.first().cloned());
//! session.cart_mut().add(&products[0])?;
//!
//! let receipt = confirm_payment(&client, &mut session, Money::from_dong(50_000)).await?;
//! println!("booked {:?}", receipt.reference());
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod client;
pub mod config;
pub mod dto;
pub mod endpoints;
pub mod error;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use dto::InvoiceReceipt;
pub use error::{ApiError, ApiResult};
