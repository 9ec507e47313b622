//! # Cart
//!
//! The in-progress sale: a flat list of lines plus nothing else. The
//! promotion/tax selections and the manual discount live one level up in
//! the checkout session; the cart only knows products, quantities and
//! stock ceilings.
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product increments
//!   its quantity)
//! - `1 ≤ quantity ≤ stock_ceiling` on every line
//! - Setting a quantity to zero or below removes the line
//! - A failed mutation leaves the cart exactly as it was

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the in-progress sale.
///
/// ## Price Freezing
/// `name` and `unit_price` are copied from the product at add time. If the
/// catalog record changes while the sale is open, the line keeps the price
/// the customer saw. `stock_ceiling` is likewise the stock level observed
/// at add time; the backend re-validates stock when the invoice lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// Maximum quantity this line may reach (observed stock).
    pub stock_ceiling: i64,
}

impl CartLine {
    /// Creates a line directly. Callers are expected to pass a quantity
    /// already within the ceiling; cart mutations enforce it afterwards.
    pub fn new(
        product_id: i64,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        stock_ceiling: i64,
    ) -> Self {
        CartLine {
            product_id,
            name: name.into(),
            unit_price,
            quantity,
            stock_ceiling,
        }
    }

    /// Creates a line from a catalog product, freezing name and price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            stock_ceiling: product.stock,
        }
    }

    /// The line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The mutable line collection of an in-progress sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuilds a cart from previously snapshotted lines (held orders).
    /// The lines are trusted to already satisfy the cart invariants.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart {
            lines,
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product, the POS product-grid tap.
    ///
    /// If the product is already in the cart its quantity increments;
    /// otherwise a new line is created with quantity 1.
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        self.add_with_quantity(product, 1)
    }

    /// Adds `quantity` units of a product.
    ///
    /// ## Errors
    /// `OutOfStock` when the product has no stock or the resulting line
    /// quantity would exceed the stock ceiling. The cart is unchanged.
    pub fn add_with_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let requested = line.quantity + quantity;
            if requested > line.stock_ceiling {
                return Err(CoreError::OutOfStock {
                    name: line.name.clone(),
                    available: line.stock_ceiling,
                    requested,
                });
            }
            line.quantity = requested;
            return Ok(());
        }

        if product.stock < quantity {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - quantity ≤ 0: removes the line
    /// - quantity > stock ceiling: `OutOfStock`, cart unchanged
    /// - product not in cart: `LineNotFound`
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or(CoreError::LineNotFound { product_id })?;

        if quantity > line.stock_ceiling {
            return Err(CoreError::OutOfStock {
                name: line.name.clone(),
                available: line.stock_ceiling,
                requested: quantity,
            });
        }

        line.quantity = quantity;
        Ok(())
    }

    /// Steps a line's quantity by a delta, the ± buttons on the cart row.
    /// Stepping to zero or below removes the line.
    pub fn adjust_quantity(&mut self, product_id: i64, delta: i64) -> CoreResult<()> {
        let current = self
            .lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .ok_or(CoreError::LineNotFound { product_id })?;

        self.set_quantity(product_id, current + delta)
    }

    /// Removes a line by product id.
    pub fn remove(&mut self, product_id: i64) -> CoreResult<()> {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == before {
            Err(CoreError::LineNotFound { product_id })
        } else {
            Ok(())
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// The current lines, in insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals before any discount or tax.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price: i64, stock: i64) -> Product {
        Product {
            id,
            code: format!("SP-{:03}", id),
            barcode: None,
            name: format!("Product {}", id),
            category_id: None,
            category_name: None,
            unit: None,
            cost_price: None,
            price: Money::from_dong(price),
            stock,
            min_stock: None,
            image_url: None,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_add_creates_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 50);

        cart.add(&product).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.subtotal().dong(), 10_000);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 50);

        cart.add(&product).unwrap();
        cart.add_with_quantity(&product, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal().dong(), 30_000);
    }

    #[test]
    fn test_add_beyond_stock_fails_unchanged() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 2);

        cart.add_with_quantity(&product, 2).unwrap();
        let err = cart.add(&product).unwrap_err();

        assert!(matches!(
            err,
            CoreError::OutOfStock {
                available: 2,
                requested: 3,
                ..
            }
        ));
        // Prior state intact.
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_sold_out_product() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 0);

        assert!(cart.add(&product).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 50);

        cart.add(&product).unwrap();
        cart.set_quantity(1, 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_respects_ceiling() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 5);

        cart.add(&product).unwrap();
        assert!(cart.set_quantity(1, 5).is_ok());
        assert!(cart.set_quantity(1, 6).is_err());
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_adjust_quantity_steps() {
        let mut cart = Cart::new();
        let product = test_product(1, 10_000, 5);

        cart.add(&product).unwrap();
        cart.adjust_quantity(1, 2).unwrap();
        assert_eq!(cart.total_quantity(), 3);

        cart.adjust_quantity(1, -3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_missing_line_errors() {
        let mut cart = Cart::new();

        assert!(matches!(
            cart.remove(42).unwrap_err(),
            CoreError::LineNotFound { product_id: 42 }
        ));
        assert!(cart.set_quantity(42, 1).is_err());
        assert!(cart.adjust_quantity(42, 1).is_err());
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 10_000, 50);

        cart.add(&product).unwrap();
        product.price = Money::from_dong(99_000);

        assert_eq!(cart.subtotal().dong(), 10_000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 10_000, 50)).unwrap();
        cart.add(&test_product(2, 5_000, 50)).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }
}
