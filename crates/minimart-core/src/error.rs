//! # Error Types
//!
//! Domain-specific error types for minimart-core.
//!
//! ## Error Philosophy
//! Every variant here is user-correctable: the cashier mistyped a discount,
//! asked for more units than the shelf holds, or took too little cash. The
//! cart and session reject the operation and keep their previous state; the
//! view layer turns the error into a message. The pricing engine itself
//! never errors on valid numeric input; it saturates at zero instead.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business-rule violations raised by cart and checkout operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested quantity exceeds what is on hand.
    ///
    /// Raised by every cart mutation that would push a line past its stock
    /// ceiling; the cart is left unmutated.
    #[error("Not enough stock for {name}: {available} available, {requested} requested")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The product is not in the cart.
    #[error("Product {product_id} is not in the cart")]
    LineNotFound { product_id: i64 },

    /// Checkout requires at least one line.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cash received does not cover the grand total.
    ///
    /// Cash only; card and transfer settle externally and skip this gate.
    #[error("Insufficient payment: {required} required, {received} received")]
    InsufficientPayment { required: Money, received: Money },

    /// Input validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures.
///
/// Used for early validation of cashier input before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            name: "Coca Cola 330ml".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for Coca Cola 330ml: 3 available, 5 requested"
        );

        let err = CoreError::InsufficientPayment {
            required: Money::from_dong(120_000),
            received: Money::from_dong(100_000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: 120.000 đ required, 100.000 đ received"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative { field: "discount" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
