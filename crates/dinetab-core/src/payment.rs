//! # Payment Module
//!
//! Validates cash tenders against order totals, all in integer cents.
//!
//! ## Reconciliation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cash Reconciliation                                  │
//! │                                                                         │
//! │  Operator keys tender: "20.00"                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Money::parse("20.00") ──► 2000 cents   (boundary crossed ONCE)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_tender(1897, 2000)                                            │
//! │       │                                                                 │
//! │       ├── tendered < due? → InsufficientPayment, NO transaction        │
//! │       │                                                                 │
//! │       └── ok → change = 2000 - 1897 = 103 cents                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  reconcile(order, tender) ──► PaymentTransaction { Success, 1.03 }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original admin modal compared `parseFloat` values in one place and
//! cent-scaled integers in another. Every comparison here is an i64
//! comparison; raw decimals never meet `<` or `==`.

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Order, OrderState, PaymentMethod, PaymentStatus, PaymentTransaction};

// =============================================================================
// Tender Validation
// =============================================================================

/// Result of a successful tender validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenderCheck {
    /// Change owed to the payer (tendered - due), always >= 0.
    pub change: Money,
}

/// Validates a tendered amount against a total due.
///
/// Both values are already in cents; the subtraction and comparison are
/// exact integer operations.
///
/// ## Errors
/// [`CoreError::InsufficientPayment`] when `tendered < total_due`. No
/// transaction record is created for a failed validation.
///
/// ## Example
/// ```rust
/// use dinetab_core::money::Money;
/// use dinetab_core::payment::validate_tender;
///
/// let due = Money::parse("10.00").unwrap();
/// assert!(validate_tender(due, Money::parse("9.99").unwrap()).is_err());
///
/// let check = validate_tender(due, Money::parse("15.00").unwrap()).unwrap();
/// assert_eq!(check.change.display(), "5.00");
/// ```
pub fn validate_tender(total_due: Money, tendered: Money) -> CoreResult<TenderCheck> {
    if tendered < total_due {
        return Err(CoreError::InsufficientPayment {
            total_due,
            tendered,
        });
    }

    Ok(TenderCheck {
        change: tendered - total_due,
    })
}

// =============================================================================
// Transaction Construction
// =============================================================================

/// Builds the immutable transaction record for a valid tender.
///
/// Only a `Submitted` order can be settled: paying a Confirmed order again
/// would double-charge the table, and paying a Cancelled one charges for
/// food that was never fired.
///
/// ## Errors
/// - [`CoreError::InvalidTransition`] when the order is not `Submitted`
/// - [`CoreError::InsufficientPayment`] when the tender comes up short
pub fn reconcile(
    order: &Order,
    tendered: Money,
    method: PaymentMethod,
) -> CoreResult<PaymentTransaction> {
    if order.state != OrderState::Submitted {
        return Err(CoreError::InvalidTransition {
            order_id: order.order_id.clone(),
            current_state: order.state,
            operation: "pay",
        });
    }

    let check = validate_tender(order.total, tendered)?;

    Ok(PaymentTransaction {
        order_id: order.order_id.clone(),
        table_id: order.table_id.clone(),
        total_due: order.total,
        amount_tendered: tendered,
        change: check.change,
        method,
        status: PaymentStatus::Success,
        created_at: Utc::now(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
