//! # Validation Module
//!
//! Input validation utilities for dinetab.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty fields, keypad input)                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Identifier shape, quantity bounds                                 │
//! │  └── Runs before any cart/order mutation                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (cart/order/payment modules)                  │
//! │  └── Quantity >= 1 invariant, lifecycle guards, tender checks          │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a table identifier.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 16 characters (table numbers in the routing path are short)
///
/// ## Example
/// ```rust
/// use dinetab_core::validation::validate_table_id;
///
/// assert!(validate_table_id("5").is_ok());
/// assert!(validate_table_id("").is_err());
/// ```
pub fn validate_table_id(table_id: &str) -> ValidationResult<()> {
    let table_id = table_id.trim();

    if table_id.is_empty() {
        return Err(ValidationError::Required {
            field: "table_id".to_string(),
        });
    }

    if table_id.len() > 16 {
        return Err(ValidationError::InvalidFormat {
            field: "table_id".to_string(),
            reason: "must be at most 16 characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog item identifier.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 64 characters
pub fn validate_item_id(item_id: &str) -> ValidationResult<()> {
    let item_id = item_id.trim();

    if item_id.is_empty() {
        return Err(ValidationError::Required {
            field: "item_id".to_string(),
        });
    }

    if item_id.len() > 64 {
        return Err(ValidationError::InvalidFormat {
            field: "item_id".to_string(),
            reason: "must be at most 64 characters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a directly-set line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
