//! # Domain Types
//!
//! Core domain types used throughout dinetab.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   CatalogItem   │   │      Order      │   │ PaymentTransaction  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  item_id        │   │  order_id(UUID) │   │  order_id           │   │
//! │  │  name           │   │  table_id       │   │  table_id           │   │
//! │  │  unit_price     │   │  line_items     │   │  total_due          │   │
//! │  └─────────────────┘   │  total, state   │   │  tendered, change   │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    LineItem     │   │   OrderState    │   │   PaymentMethod     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  item_id        │   │  Building       │   │  Cash               │   │
//! │  │  name, qty      │   │  Submitted      │   └─────────────────────┘   │
//! │  │  unit_price     │   │  Confirmed      │                             │
//! │  └─────────────────┘   │  Cancelled      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` freezes the catalog name and price at the moment it enters a
//! cart; an `Order` freezes the cart's line items at submission. Later
//! catalog edits never change what the diner agreed to pay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// One item as returned by the external menu catalog.
///
/// The catalog is an external collaborator: the core looks items up by id
/// and NEVER invents names or prices on its own.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Catalog identifier (business id, e.g. "1" or "burger").
    pub item_id: String,

    /// Display name shown to the diner.
    pub name: String,

    /// Unit price in cents, converted once at the catalog boundary.
    pub unit_price: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// One catalog item plus a quantity inside a cart or order.
///
/// Owned exclusively by the cart of one table session until the cart is
/// snapshotted into an order. Invariant: `quantity >= 1`; a line whose
/// quantity drops to zero is removed, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Catalog item id this line refers to.
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,

    /// When this line first entered the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a catalog lookup result.
    pub fn from_catalog(item: &CatalogItem, quantity: i64) -> Self {
        LineItem {
            item_id: item.item_id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity) in cents.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order State
// =============================================================================

/// The lifecycle state of an order.
///
/// ```text
/// Building ──► Submitted ──► Confirmed   (terminal)
///                   │
///                   └──────► Cancelled   (terminal)
/// ```
///
/// `Building` is the cart phase; [`crate::order::OrderSession::submit`]
/// produces orders directly in `Submitted`. No transition leaves a terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Cart is still being assembled (pre-submission).
    Building,
    /// Order frozen and sent upstream; awaiting confirmation or payment.
    Submitted,
    /// Order paid/acknowledged. Terminal and immutable.
    Confirmed,
    /// Order withdrawn before confirmation. Terminal.
    Cancelled,
}

impl Default for OrderState {
    fn default() -> Self {
        OrderState::Building
    }
}

// =============================================================================
// Order
// =============================================================================

/// An immutable snapshot of a cart, bound to a table session.
///
/// Created by [`crate::order::OrderSession::submit`]; everything except
/// `state` is frozen at creation. Orders are archived once paid, never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    ///
    /// The original client drew a random 6-digit number with no uniqueness
    /// check, a latent collision bug. UUIDs need no coordination.
    pub order_id: String,

    /// Table session this order belongs to.
    pub table_id: String,

    /// Frozen copy of the cart's line items, insertion order preserved.
    pub line_items: Vec<LineItem>,

    /// Sum of line totals, computed in cents at submission time.
    pub total: Money,

    /// Lifecycle state; the only mutable field.
    pub state: OrderState,

    /// When the order was submitted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a payment was tendered.
///
/// Cash is the only method the admin till accepts today; the enum leaves
/// room for card terminals without touching the reconciliation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
}

// =============================================================================
// Payment Status
// =============================================================================

/// Outcome recorded on a payment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Tender covered the total; change computed and returned.
    Success,
    /// Payment was declined/failed by the recording collaborator.
    Failed,
}

// =============================================================================
// Payment Transaction
// =============================================================================

/// A reconciled cash payment against one order.
///
/// Created exactly once per payment submission and immutable after
/// creation. `change == amount_tendered - total_due`, computed in cents,
/// and is >= 0 whenever `status == Success`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentTransaction {
    /// Order this payment settles.
    pub order_id: String,

    /// Table session the order belonged to.
    pub table_id: String,

    /// Order total at reconciliation time.
    pub total_due: Money,

    /// Cash offered by the payer.
    pub amount_tendered: Money,

    /// Change returned to the payer (tendered - due).
    pub change: Money,

    /// Tender method.
    pub method: PaymentMethod,

    /// Outcome of the reconciliation.
    pub status: PaymentStatus,

    /// When the transaction was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
