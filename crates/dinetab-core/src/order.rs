//! # Order Session Module
//!
//! Freezes carts into orders and enforces the order lifecycle.
//!
//! ## Lifecycle Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Lifecycle                                    │
//! │                                                                         │
//! │   Cart (Building) ──submit──► Submitted ──confirm──► Confirmed         │
//! │                                   │                   (terminal)        │
//! │                                   │                                     │
//! │                                   └───cancel───────► Cancelled          │
//! │                                                       (terminal)        │
//! │                                                                         │
//! │  • submit on an empty cart fails with EmptyCart                        │
//! │  • confirm/cancel anywhere else fails with InvalidTransition           │
//! │  • nothing ever transitions OUT of Confirmed or Cancelled              │
//! │  • paid orders are archived in the session, never deleted              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Order Identifiers
//! The original client drew `Math.floor(100000 + Math.random() * 900000)`
//! with no uniqueness check. Two tables submitting in the same second could
//! collide and cross-wire their payments. Orders here get a UUID v4, unique
//! without coordination; the uniqueness property is pinned by a test.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, OrderState};

// =============================================================================
// Order Session
// =============================================================================

/// Tracks every order produced during the service day, keyed by order id.
///
/// The session owns orders for their whole lifetime: active ones waiting on
/// payment and archived ones already settled. It is pure in-memory state;
/// persistence happens through the service layer's order gateway.
#[derive(Debug, Default)]
pub struct OrderSession {
    orders: HashMap<String, Order>,
}

impl OrderSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        OrderSession {
            orders: HashMap::new(),
        }
    }

    /// Snapshots a cart into a new `Submitted` order.
    ///
    /// The returned order carries a frozen copy of the cart's line items and
    /// a total computed in cents; later cart mutations do not touch it.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when the cart has no line items.
    pub fn submit(&mut self, cart: &Cart) -> CoreResult<Order> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart {
                table_id: cart.table_id.clone(),
            });
        }

        let order = Order {
            order_id: Uuid::new_v4().to_string(),
            table_id: cart.table_id.clone(),
            line_items: cart.items().to_vec(),
            total: cart.total(),
            state: OrderState::Submitted,
            created_at: Utc::now(),
        };

        self.orders.insert(order.order_id.clone(), order.clone());
        Ok(order)
    }

    /// Transitions `Submitted → Confirmed`.
    ///
    /// Clearing the table's cart is the caller's job (the session has no
    /// reach into the [`crate::cart::CartStore`]).
    ///
    /// ## Errors
    /// - [`CoreError::OrderNotFound`] for unknown ids
    /// - [`CoreError::InvalidTransition`] from any state but `Submitted`
    pub fn confirm(&mut self, order_id: &str) -> CoreResult<Order> {
        self.transition(order_id, OrderState::Confirmed, "confirm")
    }

    /// Transitions `Submitted → Cancelled`.
    ///
    /// ## Errors
    /// - [`CoreError::OrderNotFound`] for unknown ids
    /// - [`CoreError::InvalidTransition`] from any state but `Submitted`
    pub fn cancel(&mut self, order_id: &str) -> CoreResult<Order> {
        self.transition(order_id, OrderState::Cancelled, "cancel")
    }

    /// Removes an order whose upstream submission was rejected.
    ///
    /// The service layer rolls back with this when the order gateway returns
    /// a non-success response, so a retry starts from a clean slate.
    pub fn discard(&mut self, order_id: &str) {
        self.orders.remove(order_id);
    }

    /// Looks up an order by id (active or archived).
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// The `Submitted` order for a table, if one is awaiting settlement.
    pub fn active_for_table(&self, table_id: &str) -> Option<&Order> {
        self.orders
            .values()
            .find(|o| o.table_id == table_id && o.state == OrderState::Submitted)
    }

    /// Number of orders held by the session (active + archived).
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the session holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    // Both lifecycle transitions share the same guard: only a Submitted
    // order may move, and terminal states stay put.
    fn transition(
        &mut self,
        order_id: &str,
        target: OrderState,
        operation: &'static str,
    ) -> CoreResult<Order> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?;

        if order.state != OrderState::Submitted {
            return Err(CoreError::InvalidTransition {
                order_id: order_id.to_string(),
                current_state: order.state,
                operation,
            });
        }

        order.state = target;
        Ok(order.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
