//! # Checkout Service
//!
//! Orchestrates the cart → order → payment lifecycle across the pure core
//! and the external collaborators.
//!
//! ## End-to-End Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  Diner (table 5)              CheckoutService            Collaborators  │
//! │  ───────────────              ───────────────            ─────────────  │
//! │                                                                         │
//! │  tap "Burger" ──────────────► add_to_cart ─────────────► catalog       │
//! │                               CartStore.add_item                        │
//! │                                                                         │
//! │  "Place order" ─────────────► submit_order                              │
//! │                               OrderSession.submit                       │
//! │                               ───────────────────────────► order store  │
//! │                               OrderSubmitted event ──► UI routes        │
//! │                                                                         │
//! │  Admin keys "20.00" ────────► submit_payment                            │
//! │                               reconcile (cents-exact)                   │
//! │                               ───────────────────────────► payments     │
//! │                               OrderSession.confirm                      │
//! │                               CartStore.clear(table)                    │
//! │                               PaymentSucceeded event ──► UI routes      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Rules
//! - One logical writer per table (the table-scoped routing context).
//! - Mutexes guard the shared core state and are NEVER held across `.await`.
//! - Every gateway round-trip is tagged with the cart revision it was issued
//!   against; a response that comes back to a cart that has since moved on
//!   is discarded, not applied.
//! - No partial application: a gateway failure rolls back the in-memory
//!   order, leaving cart and session exactly as they were.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use dinetab_core::cart::CartStore;
use dinetab_core::order::OrderSession;
use dinetab_core::payment;
use dinetab_core::types::{LineItem, Order, PaymentMethod, PaymentTransaction};
use dinetab_core::validation::{validate_item_id, validate_quantity, validate_table_id};
use dinetab_core::Money;

use crate::error::{ApiError, ErrorCode};
use crate::events::{EventBus, LifecycleEvent};
use crate::gateway::{CatalogGateway, OrderGateway, PaymentGateway};

// =============================================================================
// Cart View
// =============================================================================

/// Snapshot of one table's cart, returned from every cart operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub table_id: String,
    pub items: Vec<LineItem>,
    pub item_count: usize,
    pub total: Money,
}

impl CartView {
    fn snapshot(store: &CartStore, table_id: &str) -> Self {
        let items = store.list_items(table_id);
        CartView {
            table_id: table_id.to_string(),
            item_count: items.len(),
            total: store.get_total(table_id),
            items,
        }
    }
}

// =============================================================================
// Checkout Service
// =============================================================================

/// The one service object owning cart and order state for the venue.
///
/// ## Thread Safety
/// `CartStore` and `OrderSession` live behind `Mutex`es because UI commands
/// can run concurrently. Locks are scoped tightly and released before any
/// gateway `.await`, so a slow collaborator never blocks other tables'
/// cart edits.
#[derive(Debug)]
pub struct CheckoutService<C, O, P> {
    catalog: C,
    order_gateway: O,
    payment_gateway: P,
    carts: Mutex<CartStore>,
    session: Mutex<OrderSession>,
    events: EventBus,
}

impl<C, O, P> CheckoutService<C, O, P>
where
    C: CatalogGateway,
    O: OrderGateway,
    P: PaymentGateway,
{
    /// Creates a service with empty cart and order state.
    pub fn new(catalog: C, order_gateway: O, payment_gateway: P) -> Self {
        CheckoutService {
            catalog,
            order_gateway,
            payment_gateway,
            carts: Mutex::new(CartStore::new()),
            session: Mutex::new(OrderSession::new()),
            events: EventBus::new(),
        }
    }

    /// Subscribes to lifecycle events (navigation signals).
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<LifecycleEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Table Session Lifecycle
    // =========================================================================

    /// Opens a table session (explicit cart init).
    pub fn open_table(&self, table_id: &str) -> Result<(), ApiError> {
        validate_table_id(table_id)?;
        debug!(table_id, "open_table");
        self.with_carts(|carts| {
            carts.init(table_id);
        });
        Ok(())
    }

    /// Ends a table session, dropping its cart entirely.
    pub fn close_table(&self, table_id: &str) {
        debug!(table_id, "close_table");
        self.with_carts(|carts| carts.teardown(table_id));
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Gets the current cart contents for a table.
    pub fn get_cart(&self, table_id: &str) -> CartView {
        self.with_carts(|carts| CartView::snapshot(carts, table_id))
    }

    /// Adds a catalog item to a table's cart.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity increases by `quantity` (default 1;
    ///   the menu page's +/- stepper sends -1 to step down)
    /// - Item not in cart: looked up in the catalog and added with its
    ///   frozen name and price
    pub async fn add_to_cart(
        &self,
        table_id: &str,
        item_id: &str,
        quantity: Option<i64>,
    ) -> Result<CartView, ApiError> {
        let quantity = quantity.unwrap_or(1);
        validate_table_id(table_id)?;
        validate_item_id(item_id)?;
        debug!(table_id, item_id, quantity, "add_to_cart");

        // Prices come from the catalog, never from the caller.
        let item = self
            .catalog
            .lookup(item_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, item_id, "Catalog lookup failed");
                ApiError::new(ErrorCode::Internal, "Catalog unavailable")
            })?
            .ok_or_else(|| ApiError::not_found("Catalog item", item_id))?;

        self.with_carts(|carts| {
            carts.add_item(table_id, &item, quantity)?;
            Ok(CartView::snapshot(carts, table_id))
        })
    }

    /// Sets a line's quantity directly; 0 removes the line.
    pub fn set_quantity(
        &self,
        table_id: &str,
        item_id: &str,
        quantity: i64,
    ) -> Result<CartView, ApiError> {
        validate_table_id(table_id)?;
        validate_item_id(item_id)?;
        // Zero and below mean "remove the line"; only positive values are
        // real quantities subject to the range check.
        if quantity > 0 {
            validate_quantity(quantity)?;
        }
        debug!(table_id, item_id, quantity, "set_quantity");
        self.with_carts(|carts| {
            carts.set_quantity(table_id, item_id, quantity)?;
            Ok(CartView::snapshot(carts, table_id))
        })
    }

    /// Removes a line from a table's cart.
    pub fn remove_from_cart(&self, table_id: &str, item_id: &str) -> CartView {
        debug!(table_id, item_id, "remove_from_cart");
        self.with_carts(|carts| {
            carts.remove_item(table_id, item_id);
            CartView::snapshot(carts, table_id)
        })
    }

    // =========================================================================
    // Order Lifecycle
    // =========================================================================

    /// Freezes a table's cart into an order and records it upstream.
    ///
    /// ## Failure Semantics
    /// - Empty cart: `EMPTY_CART`, nothing happens
    /// - Gateway non-success: `ORDER_SUBMISSION_FAILED`, the in-memory order
    ///   is rolled back and the cart is untouched, so the diner can retry
    /// - Cart mutated while the request was in flight: the response is
    ///   stale; the order is rolled back and `SUPERSEDED_REQUEST` returned
    pub async fn submit_order(&self, table_id: &str) -> Result<Order, ApiError> {
        validate_table_id(table_id)?;
        debug!(table_id, "submit_order");

        // Correlation snapshot: the revision this request is issued against.
        let (cart, revision) = self.with_carts(|carts| {
            (carts.cart(table_id).cloned(), carts.revision(table_id))
        });
        let cart = cart.ok_or_else(|| {
            ApiError::from(dinetab_core::CoreError::EmptyCart {
                table_id: table_id.to_string(),
            })
        })?;

        let order = self.with_session(|session| session.submit(&cart))?;

        if let Err(err) = self.order_gateway.record_order(&order).await {
            self.with_session(|session| session.discard(&order.order_id));
            return Err(ApiError::order_submission_failed(err));
        }

        // The diner may have kept editing (or navigated away and the cart
        // was cleared for another order) while we were suspended. A stale
        // response must not be applied.
        let current = self.with_carts(|carts| carts.revision(table_id));
        if current != revision {
            self.with_session(|session| session.discard(&order.order_id));
            warn!(
                table_id,
                order_id = %order.order_id,
                "Discarding stale order submission response"
            );
            return Err(ApiError::superseded(table_id));
        }

        info!(
            order_id = %order.order_id,
            table_id,
            total = %order.total,
            items = order.line_items.len(),
            "Order submitted"
        );
        self.events.publish(LifecycleEvent::OrderSubmitted {
            order_id: order.order_id.clone(),
            table_id: order.table_id.clone(),
        });

        Ok(order)
    }

    /// Confirms a submitted order and clears the table's cart.
    pub fn confirm_order(&self, order_id: &str) -> Result<Order, ApiError> {
        debug!(order_id, "confirm_order");

        let order = self.with_session(|session| session.confirm(order_id))?;
        self.with_carts(|carts| carts.clear(&order.table_id));

        info!(order_id, table_id = %order.table_id, "Order confirmed");
        self.events.publish(LifecycleEvent::OrderConfirmed {
            order_id: order.order_id.clone(),
            table_id: order.table_id.clone(),
        });

        Ok(order)
    }

    /// Cancels a submitted order before confirmation. The cart is left as
    /// it was, so the diner can amend and resubmit.
    pub fn cancel_order(&self, order_id: &str) -> Result<Order, ApiError> {
        debug!(order_id, "cancel_order");
        let order = self.with_session(|session| session.cancel(order_id))?;
        info!(order_id, table_id = %order.table_id, "Order cancelled");
        Ok(order)
    }

    /// Looks up an order by id (active or archived).
    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.with_session(|session| session.get(order_id).cloned())
    }

    /// The submitted order awaiting settlement for a table, if any.
    pub fn active_order(&self, table_id: &str) -> Option<Order> {
        self.with_session(|session| session.active_for_table(table_id).cloned())
    }

    // =========================================================================
    // Payment
    // =========================================================================

    /// Validates an operator-keyed cash tender and settles the order.
    ///
    /// The tender arrives as the raw keypad string and is parsed into cents
    /// exactly once; every comparison after that is integer-exact.
    ///
    /// ## Failure Semantics
    /// - Short tender: `INSUFFICIENT_PAYMENT`, no transaction created
    /// - Gateway non-success: `PAYMENT_RECORDING_FAILED`, nothing committed;
    ///   a retry reuses the same amounts and the collaborator deduplicates
    ///   by order id
    /// - On success the order is Confirmed, the cart cleared, and a
    ///   `PaymentSucceeded` event published
    pub async fn submit_payment(
        &self,
        order_id: &str,
        tendered: &str,
        method: PaymentMethod,
    ) -> Result<PaymentTransaction, ApiError> {
        debug!(order_id, tendered, "submit_payment");

        let tendered = Money::parse(tendered)?;
        let order = self
            .get_order(order_id)
            .ok_or_else(|| ApiError::not_found("Order", order_id))?;

        // Pure reconciliation: lifecycle guard, cents-exact comparison,
        // change computation. No state has changed yet.
        let txn = payment::reconcile(&order, tendered, method)?;

        if let Err(err) = self.payment_gateway.record_payment(&txn).await {
            return Err(ApiError::payment_recording_failed(err));
        }

        // Recording succeeded: settle locally. A concurrent settlement of
        // the same order surfaces here as InvalidTransition.
        let confirmed = self.with_session(|session| session.confirm(order_id))?;
        self.with_carts(|carts| carts.clear(&confirmed.table_id));

        info!(
            order_id,
            table_id = %confirmed.table_id,
            tendered = %txn.amount_tendered,
            change = %txn.change,
            "Payment reconciled"
        );
        self.events.publish(LifecycleEvent::PaymentSucceeded {
            order_id: confirmed.order_id.clone(),
            table_id: confirmed.table_id.clone(),
            change: txn.change,
        });

        Ok(txn)
    }

    // =========================================================================
    // Lock Helpers
    // =========================================================================
    // Locks are taken through these helpers only, which makes it impossible
    // to hold a guard across an .await point.

    fn with_carts<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut carts = self.carts.lock().expect("cart store mutex poisoned");
        f(&mut carts)
    }

    fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderSession) -> R,
    {
        let mut session = self.session.lock().expect("order session mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GatewayError, GatewayResult};
    use crate::gateway::InMemoryCatalog;
    use dinetab_core::types::{CatalogItem, OrderState, PaymentStatus};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    // -------------------------------------------------------------------------
    // Test Gateways
    // -------------------------------------------------------------------------

    /// Records orders in memory; flips to failure mode on demand.
    #[derive(Debug, Default)]
    struct RecordingOrderGateway {
        orders: Mutex<Vec<Order>>,
        fail: AtomicBool,
    }

    impl RecordingOrderGateway {
        fn recorded(&self) -> usize {
            self.orders.lock().unwrap().len()
        }
    }

    impl OrderGateway for RecordingOrderGateway {
        async fn record_order(&self, order: &Order) -> GatewayResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(GatewayError::Unavailable("order store down".into()));
            }
            self.orders.lock().unwrap().push(order.clone());
            Ok(())
        }
    }

    /// Records payments in memory; flips to failure mode on demand.
    #[derive(Debug, Default)]
    struct RecordingPaymentGateway {
        payments: Mutex<Vec<PaymentTransaction>>,
        fail: AtomicBool,
    }

    impl RecordingPaymentGateway {
        fn recorded(&self) -> Vec<PaymentTransaction> {
            self.payments.lock().unwrap().clone()
        }
    }

    impl PaymentGateway for RecordingPaymentGateway {
        async fn record_payment(&self, txn: &PaymentTransaction) -> GatewayResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(GatewayError::Unavailable("payment store down".into()));
            }
            self.payments.lock().unwrap().push(txn.clone());
            Ok(())
        }
    }

    /// Parks inside record_order until the test says proceed, so the test
    /// can interleave cart mutations with an in-flight submission.
    #[derive(Debug)]
    struct BlockingOrderGateway {
        started: Arc<Notify>,
        proceed: Arc<Notify>,
    }

    impl OrderGateway for BlockingOrderGateway {
        async fn record_order(&self, _order: &Order) -> GatewayResult<()> {
            self.started.notify_one();
            self.proceed.notified().await;
            Ok(())
        }
    }

    // -------------------------------------------------------------------------
    // Fixtures
    // -------------------------------------------------------------------------

    fn menu() -> InMemoryCatalog {
        InMemoryCatalog::with_items([
            CatalogItem {
                item_id: "burger".to_string(),
                name: "Burger".to_string(),
                unit_price: Money::from_cents(1099),
            },
            CatalogItem {
                item_id: "fries".to_string(),
                name: "Fries".to_string(),
                unit_price: Money::from_cents(399),
            },
        ])
    }

    type TestService =
        CheckoutService<InMemoryCatalog, Arc<RecordingOrderGateway>, Arc<RecordingPaymentGateway>>;

    fn service() -> (
        TestService,
        Arc<RecordingOrderGateway>,
        Arc<RecordingPaymentGateway>,
    ) {
        let order_gw = Arc::new(RecordingOrderGateway::default());
        let payment_gw = Arc::new(RecordingPaymentGateway::default());
        let svc = CheckoutService::new(menu(), Arc::clone(&order_gw), Arc::clone(&payment_gw));
        (svc, order_gw, payment_gw)
    }

    // -------------------------------------------------------------------------
    // Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_full_table_five_scenario() {
        let (svc, order_gw, payment_gw) = service();
        let mut events = svc.subscribe();

        svc.add_to_cart("5", "burger", Some(1)).await.unwrap();
        let view = svc.add_to_cart("5", "fries", Some(2)).await.unwrap();
        assert_eq!(view.total.display(), "18.97");

        let order = svc.submit_order("5").await.unwrap();
        assert_eq!(order.total.cents(), 1897);
        assert_eq!(order.state, OrderState::Submitted);
        assert_eq!(order_gw.recorded(), 1);

        let txn = svc
            .submit_payment(&order.order_id, "20.00", PaymentMethod::Cash)
            .await
            .unwrap();
        assert_eq!(txn.change.cents(), 103);
        assert_eq!(txn.status, PaymentStatus::Success);
        assert_eq!(payment_gw.recorded().len(), 1);

        // Order is archived Confirmed, and table 5's cart is empty again.
        assert_eq!(
            svc.get_order(&order.order_id).unwrap().state,
            OrderState::Confirmed
        );
        assert!(svc.get_cart("5").items.is_empty());

        // Navigation signals arrive in lifecycle order.
        assert!(matches!(
            events.recv().await.unwrap(),
            LifecycleEvent::OrderSubmitted { .. }
        ));
        match events.recv().await.unwrap() {
            LifecycleEvent::PaymentSucceeded { change, .. } => {
                assert_eq!(change.cents(), 103);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_item() {
        let (svc, _, _) = service();
        let err = svc.add_to_cart("5", "sushi", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(svc.get_cart("5").items.is_empty());
    }

    #[tokio::test]
    async fn test_submit_empty_cart_fails() {
        let (svc, order_gw, _) = service();
        let err = svc.submit_order("5").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(order_gw.recorded(), 0);
    }

    #[tokio::test]
    async fn test_order_submission_failure_leaves_cart_for_retry() {
        let (svc, order_gw, _) = service();
        svc.add_to_cart("5", "burger", None).await.unwrap();

        order_gw.fail.store(true, Ordering::SeqCst);
        let err = svc.submit_order("5").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderSubmissionFailed);

        // No partial application: cart intact, no order registered.
        assert_eq!(svc.get_cart("5").items.len(), 1);
        assert!(svc.active_order("5").is_none());

        // Same inputs, retried once the collaborator recovers.
        order_gw.fail.store(false, Ordering::SeqCst);
        let order = svc.submit_order("5").await.unwrap();
        assert_eq!(order.total.cents(), 1099);
        assert_eq!(order_gw.recorded(), 1);
    }

    #[tokio::test]
    async fn test_insufficient_tender_creates_no_transaction() {
        let (svc, _, payment_gw) = service();
        svc.add_to_cart("5", "burger", None).await.unwrap();
        let order = svc.submit_order("5").await.unwrap(); // 10.99

        let err = svc
            .submit_payment(&order.order_id, "9.99", PaymentMethod::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientPayment);

        assert!(payment_gw.recorded().is_empty());
        assert_eq!(
            svc.get_order(&order.order_id).unwrap().state,
            OrderState::Submitted
        );
        // The diner's cart is still waiting on settlement, not cleared.
        assert_eq!(svc.get_cart("5").items.len(), 1);
    }

    #[tokio::test]
    async fn test_payment_recording_failure_is_retryable() {
        let (svc, _, payment_gw) = service();
        svc.add_to_cart("5", "burger", None).await.unwrap();
        let order = svc.submit_order("5").await.unwrap();

        payment_gw.fail.store(true, Ordering::SeqCst);
        let err = svc
            .submit_payment(&order.order_id, "20.00", PaymentMethod::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentRecordingFailed);

        // Nothing committed: order still Submitted, cart untouched.
        assert_eq!(
            svc.get_order(&order.order_id).unwrap().state,
            OrderState::Submitted
        );
        assert_eq!(svc.get_cart("5").items.len(), 1);

        payment_gw.fail.store(false, Ordering::SeqCst);
        let txn = svc
            .submit_payment(&order.order_id, "20.00", PaymentMethod::Cash)
            .await
            .unwrap();
        assert_eq!(txn.change.cents(), 901);
        assert!(svc.get_cart("5").items.is_empty());
    }

    #[tokio::test]
    async fn test_paying_twice_is_rejected() {
        let (svc, _, payment_gw) = service();
        svc.add_to_cart("5", "fries", None).await.unwrap();
        let order = svc.submit_order("5").await.unwrap();

        svc.submit_payment(&order.order_id, "5.00", PaymentMethod::Cash)
            .await
            .unwrap();
        let err = svc
            .submit_payment(&order.order_id, "5.00", PaymentMethod::Cash)
            .await
            .unwrap_err();

        // Settled orders cannot be charged again.
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(payment_gw.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_keeps_cart_for_resubmission() {
        let (svc, order_gw, _) = service();
        svc.add_to_cart("5", "burger", None).await.unwrap();
        let order = svc.submit_order("5").await.unwrap();

        svc.cancel_order(&order.order_id).unwrap();
        assert_eq!(
            svc.get_order(&order.order_id).unwrap().state,
            OrderState::Cancelled
        );
        assert_eq!(svc.get_cart("5").items.len(), 1);

        // Amended cart goes out as a fresh order.
        svc.add_to_cart("5", "fries", None).await.unwrap();
        let second = svc.submit_order("5").await.unwrap();
        assert_ne!(second.order_id, order.order_id);
        assert_eq!(order_gw.recorded(), 2);
    }

    #[tokio::test]
    async fn test_stale_submission_response_is_discarded() {
        let started = Arc::new(Notify::new());
        let proceed = Arc::new(Notify::new());
        let order_gw = Arc::new(BlockingOrderGateway {
            started: Arc::clone(&started),
            proceed: Arc::clone(&proceed),
        });
        let svc = Arc::new(CheckoutService::new(
            menu(),
            order_gw,
            Arc::new(RecordingPaymentGateway::default()),
        ));

        svc.add_to_cart("5", "burger", None).await.unwrap();

        let submit = tokio::spawn({
            let svc = Arc::clone(&svc);
            async move { svc.submit_order("5").await }
        });

        // Wait for the request to be in flight, then keep editing the cart.
        started.notified().await;
        svc.add_to_cart("5", "fries", None).await.unwrap();
        proceed.notify_one();

        let err = submit.await.unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::SupersededRequest);

        // The stale order was rolled back; the edited cart stands.
        assert!(svc.active_order("5").is_none());
        assert_eq!(svc.get_cart("5").items.len(), 2);
    }

    #[tokio::test]
    async fn test_confirm_clears_cart_and_emits_event() {
        let (svc, _, _) = service();
        let mut events = svc.subscribe();

        svc.add_to_cart("5", "burger", None).await.unwrap();
        let order = svc.submit_order("5").await.unwrap();
        svc.confirm_order(&order.order_id).unwrap();

        assert!(svc.get_cart("5").items.is_empty());

        assert!(matches!(
            events.recv().await.unwrap(),
            LifecycleEvent::OrderSubmitted { .. }
        ));
        assert!(matches!(
            events.recv().await.unwrap(),
            LifecycleEvent::OrderConfirmed { .. }
        ));
    }

    #[tokio::test]
    async fn test_set_quantity_validates_input() {
        let (svc, _, _) = service();
        svc.add_to_cart("5", "burger", None).await.unwrap();

        // Out-of-range quantities are rejected before touching the cart.
        let err = svc.set_quantity("5", "burger", 1_000_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(svc.get_cart("5").items[0].quantity, 1);

        let err = svc.set_quantity("", "burger", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Zero still means remove.
        let view = svc.set_quantity("5", "burger", 0).unwrap();
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_extreme_add_delta_is_capped() {
        let (svc, _, _) = service();
        svc.add_to_cart("5", "burger", None).await.unwrap();

        let err = svc
            .add_to_cart("5", "burger", Some(i64::MAX))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(svc.get_cart("5").items[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_open_and_close_table() {
        let (svc, _, _) = service();

        svc.open_table("7").unwrap();
        assert!(svc.get_cart("7").items.is_empty());

        svc.add_to_cart("7", "fries", None).await.unwrap();
        svc.close_table("7");
        assert!(svc.get_cart("7").items.is_empty());

        assert!(svc.open_table("").is_err());
    }

    #[tokio::test]
    async fn test_keypad_tender_is_parsed_once() {
        let (svc, _, _) = service();
        svc.add_to_cart("5", "fries", Some(2)).await.unwrap(); // 7.98
        let order = svc.submit_order("5").await.unwrap();

        // "8.0" is a legitimate keypad intermediate form.
        let txn = svc
            .submit_payment(&order.order_id, "8.0", PaymentMethod::Cash)
            .await
            .unwrap();
        assert_eq!(txn.change.cents(), 2);

        let (svc, _, _) = service();
        svc.add_to_cart("5", "fries", None).await.unwrap();
        let order = svc.submit_order("5").await.unwrap();
        let err = svc
            .submit_payment(&order.order_id, "4.0.0", PaymentMethod::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
