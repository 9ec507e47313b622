//! # Wire DTOs
//!
//! The backend's record shapes, and their normalization into canonical
//! core types. This module is the **only** place that knows the backend is
//! loose about field names and types:
//!
//! - amounts arrive as JSON numbers that may be fractional; they are
//!   rounded to whole đồng here, once
//! - the same value hides behind different names per endpoint
//!   (`sellingPrice`/`price`, `totalAmount`/`total`/`grandTotal`/`amount`);
//!   serde aliases collapse each chain
//! - `isActive` may be absent, which means active
//! - promotion `discountType` and `applyTo` are free-form strings compared
//!   case-insensitively
//!
//! Downstream code never re-derives any of this.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use minimart_core::money::Money;
use minimart_core::types::{Discount, Product, Promotion, PromotionScope, Rate, SaleSummary, Tax};

// =============================================================================
// Conversion Helpers
// =============================================================================

/// Serde default for booleans that are active-when-absent.
fn default_true() -> bool {
    true
}

/// Rounds a wire amount to whole đồng. The single float→integer crossing
/// in the codebase.
fn money_from_wire(value: f64) -> Money {
    Money::from_dong(value.round() as i64)
}

fn opt_money_from_wire(value: Option<f64>) -> Option<Money> {
    value.map(money_from_wire)
}

/// Parses backend timestamps leniently: RFC 3339 first, then the
/// offset-less ISO form the backend emits. Unparseable values become
/// `None` rather than failing the whole listing.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// =============================================================================
// Product
// =============================================================================

/// Product record as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: i64,
    pub product_code: Option<String>,
    pub barcode: Option<String>,
    pub product_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub unit: Option<String>,
    pub cost_price: Option<f64>,
    #[serde(default, alias = "price")]
    pub selling_price: f64,
    #[serde(default, alias = "stock")]
    pub stock_quantity: i64,
    pub min_stock: Option<i64>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<String>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.product_id,
            code: dto.product_code.unwrap_or_default(),
            barcode: dto.barcode,
            name: dto.product_name.unwrap_or_default(),
            category_id: dto.category_id,
            category_name: dto.category_name,
            unit: dto.unit,
            cost_price: opt_money_from_wire(dto.cost_price),
            price: money_from_wire(dto.selling_price),
            stock: dto.stock_quantity,
            min_stock: dto.min_stock,
            image_url: dto.image_url,
            is_active: dto.is_active,
            created_at: parse_timestamp(dto.created_at.as_deref()),
        }
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// Promotion record as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionDto {
    pub promotion_id: i64,
    pub promotion_code: Option<String>,
    pub promotion_name: Option<String>,
    pub discount_type: Option<String>,
    #[serde(default)]
    pub discount_value: f64,
    pub min_order_amount: Option<f64>,
    pub apply_to: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `"percent"`/`"percentage"` (any casing) mean a percentage; every other
/// type string, including none at all, means a flat amount.
fn parse_discount(discount_type: Option<&str>, value: f64) -> Discount {
    let is_percent = discount_type
        .map(|t| {
            let t = t.trim().to_ascii_lowercase();
            t == "percent" || t == "percentage"
        })
        .unwrap_or(false);

    if is_percent {
        Discount::Percent(Rate::from_percent(value))
    } else {
        Discount::Amount(money_from_wire(value))
    }
}

/// `"order"`/`"invoice"`, empty or missing mean the order scope;
/// unrecognized values become `Unknown` and never apply to the cart total.
fn parse_scope(raw: Option<&str>) -> PromotionScope {
    let raw = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw,
        None => return PromotionScope::Order,
    };

    match raw.to_ascii_lowercase().as_str() {
        "order" | "invoice" => PromotionScope::Order,
        "category" => PromotionScope::Category,
        "product" => PromotionScope::Product,
        _ => PromotionScope::Unknown,
    }
}

impl From<PromotionDto> for Promotion {
    fn from(dto: PromotionDto) -> Self {
        Promotion {
            id: dto.promotion_id,
            code: dto.promotion_code.unwrap_or_default(),
            name: dto.promotion_name.unwrap_or_default(),
            discount: parse_discount(dto.discount_type.as_deref(), dto.discount_value),
            // A zero minimum behaves like no minimum; normalize it away.
            min_order: opt_money_from_wire(dto.min_order_amount).filter(Money::is_positive),
            scope: parse_scope(dto.apply_to.as_deref()),
            is_active: dto.is_active,
            starts_at: parse_timestamp(dto.start_date.as_deref()),
            ends_at: parse_timestamp(dto.end_date.as_deref()),
        }
    }
}

// =============================================================================
// Tax
// =============================================================================

/// Tax record as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDto {
    pub tax_id: i64,
    pub tax_code: Option<String>,
    pub tax_name: Option<String>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<TaxDto> for Tax {
    fn from(dto: TaxDto) -> Self {
        Tax {
            id: dto.tax_id,
            code: dto.tax_code.unwrap_or_default(),
            name: dto.tax_name.unwrap_or_default(),
            rate: Rate::from_percent(dto.tax_rate),
            is_active: dto.is_active,
        }
    }
}

// =============================================================================
// Sales
// =============================================================================

/// Completed-sale record as listed by the backend. Different report
/// endpoints emit the total under different names; the aliases fold them
/// into one field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummaryDto {
    #[serde(alias = "id")]
    pub invoice_id: i64,
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
    #[serde(default, alias = "total", alias = "grandTotal", alias = "amount")]
    pub total_amount: f64,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

impl From<SaleSummaryDto> for SaleSummary {
    fn from(dto: SaleSummaryDto) -> Self {
        SaleSummary {
            id: dto.invoice_id,
            invoice_number: dto.invoice_number,
            customer_name: dto.customer_name,
            total: money_from_wire(dto.total_amount),
            status: dto.status,
            created_at: parse_timestamp(dto.created_at.as_deref()),
        }
    }
}

/// What the backend returns after booking an invoice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceReceipt {
    #[serde(default, alias = "id")]
    pub invoice_id: Option<i64>,
    #[serde(default)]
    pub invoice_number: Option<String>,
}

impl InvoiceReceipt {
    /// Human-readable reference for the receipt header: the invoice
    /// number when assigned, otherwise the numeric id.
    pub fn reference(&self) -> Option<String> {
        self.invoice_number
            .clone()
            .or_else(|| self.invoice_id.map(|id| format!("INV-{}", id)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
