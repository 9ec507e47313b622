//! # Pricing Engine
//!
//! The single implementation of the cart money math. The legacy POS screen
//! carried this formula as five near-identical copies (summary render,
//! modal open, change calculation, confirm, hold); every caller now goes
//! through [`compute_totals`] and [`compute_change`].
//!
//! ## The Fixed Order of Application
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal        = Σ (unit_price × quantity)                     │
//! │  2. manual discount = percent of subtotal if percent > 0,           │
//! │                       else flat amount if amount > 0, else 0        │
//! │  3. promo discount  = promotion's cut of the SUBTOTAL, if eligible  │
//! │  4. total discount  = manual + promo        (additive, no cap)      │
//! │  5. taxable base    = max(0, subtotal − total discount)             │
//! │  6. tax             = rate × taxable base, if a tax is selected     │
//! │  7. grand total     = max(0, subtotal − total discount + tax)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This order is a business contract, not an implementation detail:
//! - both discounts are computed against the raw subtotal, not against
//!   each other (a 10% manual discount and a 10% promotion on 100.000 đ
//!   take 20.000 đ, not 19.000 đ)
//! - tax applies to the discounted base
//! - nothing downstream of step 4 ever goes negative
//!
//! ## Guarantees
//! Pure functions, no I/O, deterministic. Identical inputs always produce
//! identical outputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;
use crate::types::{CartTotals, Promotion, Rate, Tax};

// =============================================================================
// Manual Discount
// =============================================================================

/// The cashier-entered discount pair.
///
/// The POS form has one field for a percentage and one for a flat amount,
/// and the UI clears each when the other is typed into. The engine still
/// tolerates both being set: **percent wins when greater than zero**,
/// otherwise the flat amount applies. The session API keeps the ambiguous
/// state unreachable; this rule exists so a stale pair can never change
/// which discount the customer gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ManualDiscount {
    pub percent: Rate,
    pub amount: Money,
}

impl ManualDiscount {
    /// No manual discount.
    pub const fn none() -> Self {
        ManualDiscount {
            percent: Rate::zero(),
            amount: Money::zero(),
        }
    }

    /// A percentage discount.
    pub const fn percent(rate: Rate) -> Self {
        ManualDiscount {
            percent: rate,
            amount: Money::zero(),
        }
    }

    /// A flat amount discount.
    pub const fn amount(amount: Money) -> Self {
        ManualDiscount {
            percent: Rate::zero(),
            amount,
        }
    }

    /// Resolves the pair against a subtotal. Percent wins when > 0.
    pub fn resolve(&self, subtotal: Money) -> Money {
        if !self.percent.is_zero() {
            subtotal.apply_rate(self.percent)
        } else if self.amount.is_positive() {
            self.amount
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Computes the full monetary breakdown of a cart.
///
/// - `lines`: the cart lines; an empty slice yields an all-zero result.
/// - `manual`: the cashier-entered discount pair.
/// - `promotion`: the selected promotion, if any. Applies only when
///   active, order-scoped, and the subtotal clears `min_order`
///   ([`Promotion::applies_to`]).
/// - `tax`: the selected tax, if any. Applies only when active.
///
/// ```rust
/// use minimart_core::cart::CartLine;
/// use minimart_core::money::Money;
/// use minimart_core::pricing::{compute_totals, ManualDiscount};
///
/// let lines = vec![CartLine::new(1, "Coca Cola", Money::from_dong(10_000), 2, 50)];
/// let totals = compute_totals(&lines, &ManualDiscount::none(), None, None);
/// assert_eq!(totals.subtotal.dong(), 20_000);
/// assert_eq!(totals.grand_total.dong(), 20_000);
/// ```
pub fn compute_totals(
    lines: &[CartLine],
    manual: &ManualDiscount,
    promotion: Option<&Promotion>,
    tax: Option<&Tax>,
) -> CartTotals {
    let subtotal: Money = lines.iter().map(CartLine::line_total).sum();

    let manual_discount = manual.resolve(subtotal);

    let promotion_discount = match promotion {
        Some(promo) if promo.applies_to(subtotal) => promo.discount.amount_off(subtotal),
        _ => Money::zero(),
    };

    // Additive and uncapped: a generous promotion stacked on a manual
    // discount may exceed the subtotal. The floors below absorb that.
    let total_discount = manual_discount + promotion_discount;

    let taxable_base = (subtotal - total_discount).floor_zero();

    let tax_amount = match tax {
        Some(tax) if tax.is_active => taxable_base.apply_rate(tax.rate),
        _ => Money::zero(),
    };

    let grand_total = (subtotal - total_discount + tax_amount).floor_zero();

    CartTotals {
        subtotal,
        manual_discount,
        promotion_discount,
        total_discount,
        tax_amount,
        grand_total,
    }
}

/// Change due to the customer: `max(0, received − grand_total)`.
///
/// Whether `received` is *enough* is a separate gate
/// ([`crate::checkout::CheckoutSession::validate_payment`]) that applies to
/// cash payments only; this function just never reports negative change.
pub fn compute_change(grand_total: Money, received: Money) -> Money {
    (received - grand_total).floor_zero()
}

// =============================================================================
// Unit Tests
// =============================================================================
