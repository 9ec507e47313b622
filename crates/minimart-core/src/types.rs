//! # Domain Types
//!
//! Canonical types used throughout Minimart POS.
//!
//! ## One Shape Per Record
//! The backend is loose about field names (`sellingPrice` vs `price`,
//! `totalAmount` vs `total`, booleans that may be absent). Every record is
//! normalized into exactly one canonical shape by the api crate at
//! ingestion; everything below this boundary (the pricing engine, the
//! cart, the checkout session) only ever sees these types.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   Backend JSON           minimart-api           minimart-core       │
//! │                                                                     │
//! │   { sellingPrice,  ──►   ProductDto     ──►     Product             │
//! │     stockQuantity,       (aliases,              (price: Money,      │
//! │     isActive? }          defaults)              stock, is_active)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate in basis points (bps).
///
/// 1 basis point = 0.01%, so 825 bps = 8.25%. Shared by tax rates and
/// percent discounts; keeping rates integral makes the engine exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage, e.g. `10.0` for 10%.
    ///
    /// Negative inputs clamp to zero; validation rejects them earlier at
    /// the input boundary.
    pub fn from_percent(pct: f64) -> Self {
        if pct <= 0.0 {
            return Rate(0);
        }
        Rate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product, normalized from the backend record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Backend identifier.
    pub id: i64,

    /// Business code shown on receipts and in search.
    pub code: String,

    /// Barcode, when the product has one.
    pub barcode: Option<String>,

    /// Display name.
    pub name: String,

    pub category_id: Option<i64>,
    pub category_name: Option<String>,

    /// Sales unit ("chai", "gói", ...).
    pub unit: Option<String>,

    /// Purchase cost, for margin reports.
    pub cost_price: Option<Money>,

    /// Selling price.
    pub price: Money,

    /// Units currently on hand. This is the cart's stock ceiling.
    pub stock: i64,

    /// Reorder threshold used by the low-stock report.
    pub min_stock: Option<i64>,

    pub image_url: Option<String>,

    /// Whether the product is sellable (missing on the wire means active).
    pub is_active: bool,

    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.is_active && self.stock >= quantity
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// What a promotion takes off the order.
///
/// The backend encodes this as a free-form `discountType` string plus a
/// numeric `discountValue` that means either a percentage or a flat amount
/// depending on the type. Collapsed into a sum type at ingestion so the
/// engine never re-interprets the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Discount {
    /// Percentage of the subtotal.
    Percent(Rate),
    /// Flat amount off.
    Amount(Money),
}

impl Discount {
    /// The amount this discount takes off the given subtotal.
    pub fn amount_off(&self, subtotal: Money) -> Money {
        match self {
            Discount::Percent(rate) => subtotal.apply_rate(*rate),
            Discount::Amount(amount) => *amount,
        }
    }
}

/// Where a promotion applies.
///
/// Only `Order` participates in the cart total; category- and
/// product-scoped promotions are display-only on the POS screen (the
/// backend prices them into line items on its side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum PromotionScope {
    Order,
    Category,
    Product,
    /// A scope string this client does not recognize. Never applied.
    Unknown,
}

impl Default for PromotionScope {
    fn default() -> Self {
        PromotionScope::Order
    }
}

/// A promotional rule, normalized from the backend record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Promotion {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub discount: Discount,

    /// Minimum order subtotal for eligibility. `None` means no minimum;
    /// a zero minimum is normalized to `None` at ingestion.
    pub min_order: Option<Money>,

    pub scope: PromotionScope,

    /// Missing on the wire means active.
    pub is_active: bool,

    /// Validity window, carried for display. The backend already filters
    /// listings to the active window, so the engine does not re-check it.
    #[ts(as = "Option<String>")]
    pub starts_at: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Promotion {
    /// Whether this promotion participates in the order total at all.
    #[inline]
    pub fn is_order_scoped(&self) -> bool {
        self.scope == PromotionScope::Order
    }

    /// Whether the subtotal clears the minimum-order threshold.
    pub fn meets_minimum(&self, subtotal: Money) -> bool {
        match self.min_order {
            Some(min) if min.is_positive() => subtotal >= min,
            _ => true,
        }
    }

    /// Full eligibility check against a subtotal: active, order-scoped,
    /// minimum met.
    pub fn applies_to(&self, subtotal: Money) -> bool {
        self.is_active && self.is_order_scoped() && self.meets_minimum(subtotal)
    }
}

// =============================================================================
// Tax
// =============================================================================

/// A tax rule, normalized from the backend record.
///
/// At most one tax is selected per checkout; its rate applies to the
/// post-discount subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Tax {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub rate: Rate,
    /// Missing on the wire means active.
    pub is_active: bool,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays.
///
/// Serialized with the backend's invoice vocabulary: `Cash`, `Card`,
/// `Bank` (the POS "transfer" button maps to `Bank` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    Cash,
    Card,
    #[serde(rename = "Bank")]
    Transfer,
}

impl PaymentMethod {
    /// Whether this method requires the received amount to cover the
    /// grand total before checkout may proceed.
    #[inline]
    pub const fn requires_full_tender(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Sale Summary
// =============================================================================

/// A completed sale as listed by the reports screens.
///
/// Read model only; the POS never mutates sales after submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleSummary {
    pub id: i64,
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    pub total: Money,
    pub status: Option<String>,
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// The monetary breakdown of a cart, derived by the pricing engine.
///
/// A pure projection of cart + selections + manual discount: recomputed on
/// every mutation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub subtotal: Money,
    pub manual_discount: Money,
    pub promotion_discount: Money,
    pub total_discount: Money,
    pub tax_amount: Money,
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
