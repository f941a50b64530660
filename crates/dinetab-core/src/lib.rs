//! # dinetab-core: Pure Business Logic for dinetab
//!
//! This crate is the **heart** of dinetab. It contains the
//! cart → order → payment lifecycle as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        dinetab Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (React, per-table routes)              │   │
//! │  │    Menu browsing ──► Cart UI ──► Confirmation ──► Admin till   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  dinetab-service (boundary)                     │   │
//! │  │    CheckoutService, gateways, lifecycle events                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dinetab-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │   order   │  │  payment  │  │   │
//! │  │   │   Money   │  │ CartStore │  │  Session  │  │  tender   │  │   │
//! │  │   │   cents   │  │ LineItem  │  │ lifecycle │  │  change   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, LineItem, Order, PaymentTransaction)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Per-table carts with the quantity >= 1 invariant
//! - [`order`] - OrderSession lifecycle state machine
//! - [`payment`] - Tender validation and change computation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use dinetab_core::cart::CartStore;
//! use dinetab_core::money::Money;
//! use dinetab_core::order::OrderSession;
//! use dinetab_core::payment::validate_tender;
//! use dinetab_core::types::CatalogItem;
//!
//! let mut carts = CartStore::new();
//! carts.add_item(
//!     "5",
//!     &CatalogItem {
//!         item_id: "burger".to_string(),
//!         name: "Burger".to_string(),
//!         unit_price: Money::from_cents(1099),
//!     },
//!     1,
//! ).unwrap();
//!
//! let mut session = OrderSession::new();
//! let order = session.submit(carts.cart("5").unwrap()).unwrap();
//!
//! let check = validate_tender(order.total, Money::parse("20.00").unwrap()).unwrap();
//! assert_eq!(check.change.cents(), 901);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dinetab_core::Money` instead of
// `use dinetab_core::money::Money`

pub use cart::{Cart, CartStore};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::OrderSession;
pub use payment::{reconcile, validate_tender, TenderCheck};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unique line items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
/// Can be made configurable per venue in future versions.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Configurable per venue in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
