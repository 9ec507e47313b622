//! # Endpoint Groups
//!
//! One group per backend resource, each holding the shared [`crate::client::ApiClient`].
//! Every group returns canonical core types; DTOs stay inside this crate.

pub mod product;
pub mod promotion;
pub mod sale;
pub mod tax;

pub use product::ProductsApi;
pub use promotion::PromotionsApi;
pub use sale::SalesApi;
pub use tax::TaxesApi;
