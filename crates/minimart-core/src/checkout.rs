//! # Checkout Session
//!
//! One in-progress sale at the register. The legacy screen kept all of
//! this in module-level globals (`cart`, `discountPercent`,
//! `selectedPromotion`, ...); the session object makes the lifecycle
//! explicit: created at login, cleared on completed checkout, discarded on
//! logout.
//!
//! ## Session State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       CheckoutSession                               │
//! │                                                                     │
//! │   Cart (lines)          ── mutated by product taps / ± buttons      │
//! │   ManualDiscount        ── percent and amount mutually exclusive    │
//! │   Option<Promotion>     ── dropdown selection, survives complete()  │
//! │   Option<Tax>           ── default: first active tax                │
//! │   PaymentMethod         ── Cash | Card | Transfer                   │
//! │                                                                     │
//! │   totals() recomputes from scratch on every call, so the numbers    │
//! │   always reflect the latest completed mutation.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{compute_change, compute_totals, ManualDiscount};
use crate::types::{CartTotals, PaymentMethod, Promotion, Rate, Tax};
use crate::validation::{
    validate_discount_amount, validate_discount_percent, validate_received_amount,
};

/// Note attached to every counter sale, as the backend expects it.
const COUNTER_SALE_NOTE: &str = "Bán lẻ tại quầy";

// =============================================================================
// Invoice Payload
// =============================================================================

/// One line of the invoice submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceLine {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    /// Per-line discount. Always zero from the POS; order-level discounts
    /// travel in the header.
    pub discount: Money,
}

/// The invoice submission payload, exactly as the backend accepts it.
///
/// ## Deliberate Asymmetry
/// Only the **manual** discount amount is transmitted. The promotion
/// travels as id/code and the tax not at all: the backend recomputes both
/// from its own rules when it books the invoice. Do not "fix" this by
/// adding the computed amounts: the server contract has no fields for
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDraft {
    /// Always `None`; the backend assigns the number.
    pub invoice_number: Option<String>,
    pub customer_id: Option<i64>,
    pub user_id: Option<i64>,
    /// Resolved manual discount amount. Promotion and tax amounts are
    /// intentionally absent, see above.
    pub discount: Money,
    pub promotion_id: Option<i64>,
    pub promotion_code: Option<String>,
    pub paid_amount: Money,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub details: Vec<InvoiceLine>,
}

// =============================================================================
// Held Orders
// =============================================================================

/// A parked sale: the cart and manual discount, frozen to be resumed
/// later. Where the snapshot is stored (the legacy app used browser
/// storage) is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeldOrder {
    #[ts(as = "String")]
    pub id: Uuid,
    pub lines: Vec<CartLine>,
    pub manual: ManualDiscount,
    #[ts(as = "String")]
    pub held_at: DateTime<Utc>,
}

// =============================================================================
// Checkout Session
// =============================================================================

/// The state of one register session.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    cart: Cart,
    manual: ManualDiscount,
    promotion: Option<Promotion>,
    tax: Option<Tax>,
    payment_method: PaymentMethod,
    customer_id: Option<i64>,
    user_id: Option<i64>,
}

impl CheckoutSession {
    /// Creates a fresh session with an empty cart and no selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for a logged-in cashier.
    pub fn for_user(user_id: i64) -> Self {
        CheckoutSession {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Cart access
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable cart access for add/remove/quantity operations. Totals are
    /// derived lazily, so no recomputation hook is needed here.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    // -------------------------------------------------------------------------
    // Selections
    // -------------------------------------------------------------------------

    pub fn set_customer(&mut self, customer_id: Option<i64>) {
        self.customer_id = customer_id;
    }

    /// Sets the manual discount as a percentage, clearing any flat amount
    /// (the two form fields are mutually exclusive on screen).
    ///
    /// Rejects negative input and leaves the previous discount in place.
    pub fn set_discount_percent(&mut self, percent: f64) -> CoreResult<()> {
        validate_discount_percent(percent)?;
        self.manual = ManualDiscount::percent(Rate::from_percent(percent));
        Ok(())
    }

    /// Sets the manual discount as a flat amount, clearing any percentage.
    ///
    /// Rejects negative input and leaves the previous discount in place.
    pub fn set_discount_amount(&mut self, amount: Money) -> CoreResult<()> {
        validate_discount_amount(amount)?;
        self.manual = ManualDiscount::amount(amount);
        Ok(())
    }

    pub fn manual_discount(&self) -> ManualDiscount {
        self.manual
    }

    /// Selects (or clears) the promotion. Survives cart mutations and
    /// completed checkouts within the session.
    pub fn select_promotion(&mut self, promotion: Option<Promotion>) {
        self.promotion = promotion;
    }

    pub fn selected_promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// Selects (or clears) the tax. The POS screen defaults this to the
    /// first active tax from the catalog.
    pub fn select_tax(&mut self, tax: Option<Tax>) {
        self.tax = tax;
    }

    pub fn selected_tax(&self) -> Option<&Tax> {
        self.tax.as_ref()
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    // -------------------------------------------------------------------------
    // Derived amounts
    // -------------------------------------------------------------------------

    /// The current monetary breakdown. Recomputed from scratch on every
    /// call; never cached, never stale.
    pub fn totals(&self) -> CartTotals {
        compute_totals(
            self.cart.lines(),
            &self.manual,
            self.promotion.as_ref(),
            self.tax.as_ref(),
        )
    }

    /// Change due for a received amount.
    pub fn change_due(&self, received: Money) -> Money {
        compute_change(self.totals().grand_total, received)
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// The confirm-time payment gate.
    ///
    /// Cash must cover the grand total; card and transfer settle through
    /// an external terminal, so any received amount passes.
    pub fn validate_payment(&self, received: Money) -> CoreResult<()> {
        validate_received_amount(received)?;

        if self.payment_method.requires_full_tender() {
            let required = self.totals().grand_total;
            if received < required {
                return Err(CoreError::InsufficientPayment { required, received });
            }
        }

        Ok(())
    }

    /// Builds the invoice submission payload for the current sale.
    ///
    /// Fails on an empty cart or an insufficient cash tender; the session
    /// is not modified either way. Submission and [`Self::complete`] are
    /// the caller's next steps.
    pub fn build_invoice(&self, received: Money) -> CoreResult<InvoiceDraft> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        self.validate_payment(received)?;

        // Only the manual discount is resolved to an amount here; the
        // promotion rides along as id/code for server-side recomputation.
        let manual_discount = self.manual.resolve(self.cart.subtotal());

        Ok(InvoiceDraft {
            invoice_number: None,
            customer_id: self.customer_id,
            user_id: self.user_id,
            discount: manual_discount,
            promotion_id: self.promotion.as_ref().map(|p| p.id),
            promotion_code: self.promotion.as_ref().map(|p| p.code.clone()),
            paid_amount: received,
            payment_method: self.payment_method,
            notes: Some(COUNTER_SALE_NOTE.to_string()),
            details: self
                .cart
                .lines()
                .iter()
                .map(|line| InvoiceLine {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    discount: Money::zero(),
                })
                .collect(),
        })
    }

    /// Resets the sale after a successful checkout (or an explicit clear):
    /// empties the cart and the manual discount. The promotion and tax
    /// selections stay, matching the register behavior: the next customer
    /// sees the same dropdown state.
    pub fn complete(&mut self) {
        self.cart.clear();
        self.manual = ManualDiscount::none();
    }

    // -------------------------------------------------------------------------
    // Held orders
    // -------------------------------------------------------------------------

    /// Parks the current sale: snapshots cart and manual discount, then
    /// clears both so the register is free for the next customer.
    pub fn hold(&mut self) -> CoreResult<HeldOrder> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let held = HeldOrder {
            id: Uuid::new_v4(),
            lines: self.cart.lines().to_vec(),
            manual: self.manual,
            held_at: Utc::now(),
        };

        self.complete();
        Ok(held)
    }

    /// Restores a parked sale, replacing the current cart and manual
    /// discount. Selections are untouched.
    pub fn resume(&mut self, held: HeldOrder) {
        self.cart = Cart::from_lines(held.lines);
        self.manual = held.manual;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
