//! # Lifecycle Events
//!
//! Navigation signals published by the checkout flow.
//!
//! ## Why Events Instead of Navigation?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The core never routes the user. It announces what happened:           │
//! │                                                                         │
//! │  OrderSubmitted   ──► diner UI routes to the confirmation page         │
//! │  OrderConfirmed   ──► diner UI routes back to the menu                 │
//! │  PaymentSucceeded ──► admin till closes the payment modal              │
//! │                                                                         │
//! │  Subscribers come and go (pages mount/unmount); a broadcast channel    │
//! │  with no receivers simply drops the event.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

use dinetab_core::Money;

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_CAPACITY: usize = 64;

// =============================================================================
// Lifecycle Event
// =============================================================================

/// A checkout lifecycle transition the surrounding UI may route on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LifecycleEvent {
    /// A cart was frozen into an order and accepted upstream.
    #[serde(rename_all = "camelCase")]
    OrderSubmitted { order_id: String, table_id: String },

    /// An order reached its terminal Confirmed state.
    #[serde(rename_all = "camelCase")]
    OrderConfirmed { order_id: String, table_id: String },

    /// A cash payment settled an order; change is owed to the payer.
    #[serde(rename_all = "camelCase")]
    PaymentSucceeded {
        order_id: String,
        table_id: String,
        change: Money,
    },
}

// =============================================================================
// Event Bus
// =============================================================================

/// In-process fan-out for lifecycle events.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<LifecycleEvent>,
}

impl EventBus {
    /// Creates a bus with the default buffer capacity.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CAPACITY);
        EventBus { tx }
    }

    /// Subscribes to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.tx.subscribe()
    }

    /// Publishes an event. Having no subscribers is not an error.
    pub fn publish(&self, event: LifecycleEvent) {
        trace!(?event, "Publishing lifecycle event");
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
