//! # Error Types
//!
//! Domain-specific error types for dinetab-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dinetab-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  dinetab-service errors (separate crate)                               │
//! │  ├── GatewayError     - Network boundary failures                      │
//! │  └── ApiError         - What the caller/UI sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table id, order id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Precondition errors never mutate state; callers reject the input
//!    rather than retry

use thiserror::Error;

use crate::money::Money;
use crate::types::OrderState;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A display-level amount could not be converted into cents.
    ///
    /// ## When This Occurs
    /// - Negative or non-finite decimal crosses the money boundary
    /// - Keypad tender string has a third fractional digit or stray chars
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// A cart mutation would violate the quantity >= 1 invariant.
    ///
    /// ## When This Occurs
    /// - `add_item` asked to create a line with zero or negative quantity
    #[error("Invalid quantity {quantity} for item {item_id}")]
    InvalidQuantity { item_id: String, quantity: i64 },

    /// Attempted to snapshot an empty cart into an order.
    ///
    /// ## User Workflow
    /// ```text
    /// Proceed to checkout on table 5
    ///      │
    ///      ▼
    /// Cart for table 5 has no line items
    ///      │
    ///      ▼
    /// EmptyCart { table_id: "5" } → UI shows "Your cart is empty"
    /// ```
    #[error("Cart for table {table_id} is empty")]
    EmptyCart { table_id: String },

    /// Order lifecycle transition not permitted from the current state.
    ///
    /// ## When This Occurs
    /// - `confirm` on an already Confirmed or Cancelled order
    /// - `cancel` after confirmation
    #[error("Order {order_id} is {current_state:?}, cannot {operation}")]
    InvalidTransition {
        order_id: String,
        current_state: OrderState,
        operation: &'static str,
    },

    /// Tendered cash does not cover the order total.
    #[error("Insufficient payment: tendered {tendered} against total {total_due}")]
    InsufficientPayment { total_due: Money, tendered: Money },

    /// Order cannot be found in the session.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed table identifier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
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
        let err = CoreError::InsufficientPayment {
            total_due: Money::from_cents(1000),
            tendered: Money::from_cents(999),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: tendered $9.99 against total $10.00"
        );

        let err = CoreError::EmptyCart {
            table_id: "5".to_string(),
        };
        assert_eq!(err.to_string(), "Cart for table 5 is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "table_id".to_string(),
        };
        assert_eq!(err.to_string(), "table_id is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
