//! # minimart-core: Pure Business Logic for Minimart POS
//!
//! This crate is the **heart** of the Minimart POS rework. It contains all
//! business logic as pure functions and plain state objects with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Minimart POS Architecture                       │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Browser view layer (external)                 │  │
//! │  │   Product grid ──► Cart panel ──► Payment modal ──► Receipt   │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │ TS bindings / JSON               │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ minimart-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐ │  │
//! │  │  │  money  │ │ pricing │ │  cart   │ │ checkout │ │ types  │ │  │
//! │  │  │  Money  │ │ engine  │ │  lines  │ │ session  │ │ records│ │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘ │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                        │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              minimart-api (remote backend layer)              │  │
//! │  │        catalog fetch, normalization, invoice submission       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer money in đồng (no floating point!)
//! - [`types`] - Canonical domain types (Product, Promotion, Tax, ...)
//! - [`pricing`] - The pricing engine: totals and change, exactly once
//! - [`cart`] - Cart lines and mutations under stock ceilings
//! - [`checkout`] - The register session and invoice payload
//! - [`validation`] - Cashier input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the engine is deterministic - same input, same output
//! 2. **No I/O**: network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are whole đồng (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use minimart_core::checkout::CheckoutSession;
//! use minimart_core::money::Money;
//! use minimart_core::types::Product;
//!
//! let mut session = CheckoutSession::new();
//! let product = Product {
//!     id: 1,
//!     code: "SP-001".into(),
//!     barcode: None,
//!     name: "Coca Cola 330ml".into(),
//!     category_id: None,
//!     category_name: None,
//!     unit: None,
//!     cost_price: None,
//!     price: Money::from_dong(12_000),
//!     stock: 40,
//!     min_stock: None,
//!     image_url: None,
//!     is_active: true,
//!     created_at: None,
//! };
//!
//! session.cart_mut().add(&product)?;
//! assert_eq!(session.totals().grand_total.dong(), 12_000);
//! # Ok::<(), minimart_core::error::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minimart_core::Money` instead of
// `use minimart_core::money::Money`

pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutSession, HeldOrder, InvoiceDraft, InvoiceLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_change, compute_totals, ManualDiscount};
pub use types::*;
