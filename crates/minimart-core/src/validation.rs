//! # Validation Module
//!
//! Input validation for cashier-entered values.
//!
//! The legacy screens funneled raw `<input>` strings through `parseFloat`
//! and silently accepted whatever came out, negatives included. Typed
//! inputs take care of "non-numeric" here; these checks enforce the sign
//! rules before any state changes.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a manual discount percentage.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (means "no percent discount")
///
/// ```rust
/// use minimart_core::validation::validate_discount_percent;
///
/// assert!(validate_discount_percent(10.0).is_ok());
/// assert!(validate_discount_percent(0.0).is_ok());
/// assert!(validate_discount_percent(-5.0).is_err());
/// ```
pub fn validate_discount_percent(percent: f64) -> ValidationResult<()> {
    if percent < 0.0 || percent.is_nan() {
        return Err(ValidationError::MustBeNonNegative {
            field: "discount percent",
        });
    }

    Ok(())
}

/// Validates a manual flat discount amount.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (means "no flat discount")
pub fn validate_discount_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "discount amount",
        });
    }

    Ok(())
}

/// Validates the cash amount received from the customer.
///
/// ## Rules
/// - Must not be negative
/// - Whether it covers the grand total is a separate, cash-only gate at
///   confirm time
pub fn validate_received_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "received amount",
        });
    }

    Ok(())
}

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0); setting a line to zero is expressed through
///   `set_quantity`, which removes the line instead
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
