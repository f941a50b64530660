//! # Gateway Traits
//!
//! Contracts for the external collaborators the checkout flow depends on.
//!
//! ## Boundary Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    External Collaborators                               │
//! │                                                                         │
//! │  CheckoutService                                                        │
//! │       │                                                                 │
//! │       ├──► CatalogGateway.lookup(item_id)                              │
//! │       │      returns { name, unit_price } — the core NEVER invents     │
//! │       │      prices on its own                                          │
//! │       │                                                                 │
//! │       ├──► OrderGateway.record_order(order)                            │
//! │       │      non-success ⇒ OrderSubmissionFailed, cart untouched       │
//! │       │                                                                 │
//! │       └──► PaymentGateway.record_payment(txn)                          │
//! │              non-success ⇒ PaymentRecordingFailed, nothing committed   │
//! │              MUST deduplicate retries by order_id                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Suspension happens only here: every dinetab-core operation is synchronous
//! and in-memory.

use std::collections::HashMap;

use dinetab_core::types::{CatalogItem, Order, PaymentTransaction};

use crate::error::GatewayResult;

// =============================================================================
// Catalog Gateway
// =============================================================================

/// Read access to the external menu catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogGateway: Send + Sync {
    /// Looks up one catalog item by id. `None` when the item is unknown.
    async fn lookup(&self, item_id: &str) -> GatewayResult<Option<CatalogItem>>;
}

// =============================================================================
// Order Gateway
// =============================================================================

/// Persistence for submitted orders (network boundary).
#[allow(async_fn_in_trait)]
pub trait OrderGateway: Send + Sync {
    /// Records a serialized order upstream.
    ///
    /// Any non-success response surfaces as a [`crate::error::GatewayError`];
    /// the caller treats it as `OrderSubmissionFailed` and leaves the cart
    /// untouched for retry.
    async fn record_order(&self, order: &Order) -> GatewayResult<()>;
}

// =============================================================================
// Payment Gateway
// =============================================================================

/// Persistence for payment transactions (network boundary).
#[allow(async_fn_in_trait)]
pub trait PaymentGateway: Send + Sync {
    /// Records a payment transaction upstream.
    ///
    /// Retries after a failure reuse the same transaction content; the
    /// collaborator deduplicates by `order_id`.
    async fn record_payment(&self, txn: &PaymentTransaction) -> GatewayResult<()>;
}

// =============================================================================
// Forwarding Implementations
// =============================================================================
// Gateways are often shared (the till UI and a test both hold the recorder),
// so Arc<G> is a gateway whenever G is.

impl<G: CatalogGateway> CatalogGateway for std::sync::Arc<G> {
    async fn lookup(&self, item_id: &str) -> GatewayResult<Option<CatalogItem>> {
        (**self).lookup(item_id).await
    }
}

impl<G: OrderGateway> OrderGateway for std::sync::Arc<G> {
    async fn record_order(&self, order: &Order) -> GatewayResult<()> {
        (**self).record_order(order).await
    }
}

impl<G: PaymentGateway> PaymentGateway for std::sync::Arc<G> {
    async fn record_payment(&self, txn: &PaymentTransaction) -> GatewayResult<()> {
        (**self).record_payment(txn).await
    }
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// A fixed in-memory catalog.
///
/// The original client shipped its menu as a static array in the page
/// component; this is the same idea behind the gateway trait, and it doubles
/// as the catalog used in tests.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: HashMap<String, CatalogItem>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        InMemoryCatalog {
            items: HashMap::new(),
        }
    }

    /// Builds a catalog from a list of items.
    pub fn with_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        InMemoryCatalog {
            items: items
                .into_iter()
                .map(|i| (i.item_id.clone(), i))
                .collect(),
        }
    }

    /// Adds or replaces an item.
    pub fn insert(&mut self, item: CatalogItem) {
        self.items.insert(item.item_id.clone(), item);
    }
}

impl CatalogGateway for InMemoryCatalog {
    async fn lookup(&self, item_id: &str) -> GatewayResult<Option<CatalogItem>> {
        Ok(self.items.get(item_id).cloned())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
