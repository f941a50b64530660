//! # Cart Module
//!
//! The working set of line items for each table, before an order is placed.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle (per table)                           │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Building │────►│Submitted │────►│ Confirmed│       │
//! │  │  Cart    │     │          │     │  Order   │     │  + Paid  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_item                           clear(table)      │
//! │                   set_quantity                                          │
//! │                   remove_item                                           │
//! │                                                                         │
//! │  INVARIANT: no line item ever persists with quantity <= 0.             │
//! │  Decreasing a quantity to zero removes the line.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient State
//! The original web client kept the cart in a React context readable from
//! anywhere in the tree. Here the [`CartStore`] is an explicit service
//! object handed by reference to whoever needs it, with `init` at session
//! start and `teardown` when the table closes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogItem, LineItem};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart
// =============================================================================

/// The cart for a single table session.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item merges quantities)
/// - Quantity is always >= 1 (dropping to 0 removes the line)
/// - Maximum unique lines: [`MAX_CART_ITEMS`]
/// - Maximum quantity per line: [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Table session this cart belongs to.
    pub table_id: String,

    /// Line items in insertion order.
    items: Vec<LineItem>,

    /// Bumped on every mutation; backs the stale-response guard at the
    /// network boundary (a submission response is discarded when the cart
    /// has moved on since the request was issued).
    revision: u64,
}

impl Cart {
    /// Creates a new empty cart for a table.
    pub fn new(table_id: impl Into<String>) -> Self {
        Cart {
            table_id: table_id.into(),
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Adds a catalog item or merges into an existing line.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity increases by `quantity_delta`
    ///   (a negative delta decreases it; reaching 0 removes the line)
    /// - Item not in cart: a new line is created; `quantity_delta <= 0`
    ///   fails with [`CoreError::InvalidQuantity`]
    /// - Name and price are frozen at the moment of adding
    pub fn add_item(&mut self, item: &CatalogItem, quantity_delta: i64) -> CoreResult<()> {
        if let Some(line) = self.items.iter_mut().find(|l| l.item_id == item.item_id) {
            // Deltas arrive from the caller unbounded; saturate so an absurd
            // value trips the quantity cap instead of overflowing.
            let new_qty = line.quantity.saturating_add(quantity_delta);
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            if new_qty <= 0 {
                // Quantity never persists at or below zero.
                self.items.retain(|l| l.item_id != item.item_id);
            } else {
                line.quantity = new_qty;
            }
            self.revision += 1;
            return Ok(());
        }

        if quantity_delta <= 0 {
            return Err(CoreError::InvalidQuantity {
                item_id: item.item_id.clone(),
                quantity: quantity_delta,
            });
        }
        if quantity_delta > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity_delta,
                max: MAX_ITEM_QUANTITY,
            });
        }
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem::from_catalog(item, quantity_delta));
        self.revision += 1;
        Ok(())
    }

    /// Sets the quantity of a line directly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (no-op if absent)
    /// - line absent and `quantity > 0`: no-op — the cart cannot invent
    ///   catalog data; new lines come in through [`Cart::add_item`]
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove_item(item_id);
            return Ok(());
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.item_id == item_id) {
            if quantity > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: quantity,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = quantity;
            self.revision += 1;
        }
        Ok(())
    }

    /// Removes a line unconditionally. No-op if absent.
    pub fn remove_item(&mut self, item_id: &str) {
        let before = self.items.len();
        self.items.retain(|l| l.item_id != item_id);
        if self.items.len() != before {
            self.revision += 1;
        }
    }

    /// Returns the quantity for an item, 0 if absent.
    pub fn quantity(&self, item_id: &str) -> i64 {
        self.items
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Snapshot of the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of line totals, in cents.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Clears all lines. Used after a successful order confirmation.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.revision += 1;
        }
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of unique lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Mutation counter for the stale-response guard.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// All active carts, keyed by table session.
///
/// One cart exists per active table; it is created lazily on the first
/// `add_item` (or explicitly via [`CartStore::init`]) and lives until
/// cleared or torn down when the session ends.
///
/// ## Concurrency
/// Single logical owner per table: the table-scoped routing context
/// guarantees one active session at a time, so the store itself does no
/// locking. The service layer wraps it in a mutex when commands can race.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: HashMap<String, Cart>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CartStore {
            carts: HashMap::new(),
        }
    }

    /// Ensures a cart exists for a table (session start).
    pub fn init(&mut self, table_id: &str) -> &mut Cart {
        self.carts
            .entry(table_id.to_string())
            .or_insert_with(|| Cart::new(table_id))
    }

    /// Drops a table's cart entirely (session end).
    pub fn teardown(&mut self, table_id: &str) {
        self.carts.remove(table_id);
    }

    /// Read access to a table's cart, if one exists.
    pub fn cart(&self, table_id: &str) -> Option<&Cart> {
        self.carts.get(table_id)
    }

    /// Adds a catalog item to a table's cart, creating the cart on first use.
    pub fn add_item(
        &mut self,
        table_id: &str,
        item: &CatalogItem,
        quantity_delta: i64,
    ) -> CoreResult<()> {
        self.init(table_id).add_item(item, quantity_delta)
    }

    /// Sets a line's quantity directly; `<= 0` removes the line.
    pub fn set_quantity(&mut self, table_id: &str, item_id: &str, quantity: i64) -> CoreResult<()> {
        match self.carts.get_mut(table_id) {
            Some(cart) => cart.set_quantity(item_id, quantity),
            // No cart yet: nothing to remove, nothing to resize.
            None => Ok(()),
        }
    }

    /// Removes a line unconditionally. No-op if cart or line is absent.
    pub fn remove_item(&mut self, table_id: &str, item_id: &str) {
        if let Some(cart) = self.carts.get_mut(table_id) {
            cart.remove_item(item_id);
        }
    }

    /// Returns the quantity of an item in a table's cart, 0 if absent.
    pub fn get_quantity(&self, table_id: &str, item_id: &str) -> i64 {
        self.carts
            .get(table_id)
            .map(|c| c.quantity(item_id))
            .unwrap_or(0)
    }

    /// Snapshot of a table's line items in insertion order.
    pub fn list_items(&self, table_id: &str) -> Vec<LineItem> {
        self.carts
            .get(table_id)
            .map(|c| c.items().to_vec())
            .unwrap_or_default()
    }

    /// Sum of a table's line totals, in cents.
    pub fn get_total(&self, table_id: &str) -> Money {
        self.carts
            .get(table_id)
            .map(|c| c.total())
            .unwrap_or_else(Money::zero)
    }

    /// Empties a table's cart after order confirmation.
    pub fn clear(&mut self, table_id: &str) {
        if let Some(cart) = self.carts.get_mut(table_id) {
            cart.clear();
        }
    }

    /// Current mutation counter for a table's cart (0 if no cart).
    pub fn revision(&self, table_id: &str) -> u64 {
        self.carts.get(table_id).map(|c| c.revision()).unwrap_or(0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_item(id: &str, cents: i64) -> CatalogItem {
        CatalogItem {
            item_id: id.to_string(),
            name: format!("Item {id}"),
            unit_price: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_add_item_creates_line() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("burger", 1099), 1).unwrap();

        assert_eq!(store.get_quantity("5", "burger"), 1);
        assert_eq!(store.get_total("5").cents(), 1099);
    }

    #[test]
    fn test_add_same_item_merges_quantity() {
        let mut store = CartStore::new();
        let item = catalog_item("fries", 399);

        store.add_item("5", &item, 2).unwrap();
        store.add_item("5", &item, 3).unwrap();

        assert_eq!(store.list_items("5").len(), 1);
        assert_eq!(store.get_quantity("5", "fries"), 5);
    }

    #[test]
    fn test_add_item_rejects_nonpositive_creation() {
        let mut store = CartStore::new();
        let err = store.add_item("5", &catalog_item("burger", 1099), 0);
        assert!(matches!(err, Err(CoreError::InvalidQuantity { .. })));
        assert_eq!(store.get_quantity("5", "burger"), 0);
    }

    #[test]
    fn test_negative_delta_to_zero_removes_line() {
        let mut store = CartStore::new();
        let item = catalog_item("tea", 499);

        store.add_item("5", &item, 2).unwrap();
        store.add_item("5", &item, -2).unwrap();

        assert_eq!(store.get_quantity("5", "tea"), 0);
        assert!(store.list_items("5").is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("rice", 1099), 3).unwrap();

        store.set_quantity("5", "rice", 0).unwrap();

        assert_eq!(store.get_quantity("5", "rice"), 0);
        assert!(store.list_items("5").iter().all(|l| l.item_id != "rice"));
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut store = CartStore::new();
        // No cart at all
        store.set_quantity("9", "ghost", 0).unwrap();
        store.set_quantity("9", "ghost", 3).unwrap();
        assert_eq!(store.get_quantity("9", "ghost"), 0);

        // Cart exists but line does not
        store.add_item("9", &catalog_item("soup", 599), 1).unwrap();
        store.set_quantity("9", "ghost", 3).unwrap();
        assert_eq!(store.get_quantity("9", "ghost"), 0);
        assert_eq!(store.list_items("9").len(), 1);
    }

    #[test]
    fn test_quantity_never_at_or_below_zero() {
        let mut store = CartStore::new();
        let item = catalog_item("roll", 299);

        // Arbitrary mutation sequence
        store.add_item("2", &item, 1).unwrap();
        store.set_quantity("2", "roll", 5).unwrap();
        store.add_item("2", &item, -3).unwrap();
        store.set_quantity("2", "roll", -4).unwrap();
        let _ = store.add_item("2", &item, 0);

        for line in store.list_items("2") {
            assert!(line.quantity >= 1);
        }
    }

    #[test]
    fn test_list_items_preserves_insertion_order() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("a", 100), 1).unwrap();
        store.add_item("5", &catalog_item("b", 200), 1).unwrap();
        store.add_item("5", &catalog_item("c", 300), 1).unwrap();
        // Merging into an existing line must not reorder
        store.add_item("5", &catalog_item("a", 100), 1).unwrap();

        let ids: Vec<_> = store
            .list_items("5")
            .into_iter()
            .map(|l| l.item_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_total_sums_in_cents() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("burger", 1099), 1).unwrap();
        store.add_item("5", &catalog_item("fries", 399), 2).unwrap();

        // 10.99 + 2 * 3.99 = 18.97, exactly
        assert_eq!(store.get_total("5").cents(), 1897);
        assert_eq!(store.get_total("5").display(), "18.97");
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("burger", 1099), 1).unwrap();

        store.clear("5");

        assert!(store.list_items("5").is_empty());
        assert_eq!(store.get_total("5").cents(), 0);
    }

    #[test]
    fn test_carts_are_isolated_per_table() {
        let mut store = CartStore::new();
        store.add_item("1", &catalog_item("burger", 1099), 1).unwrap();
        store.add_item("2", &catalog_item("fries", 399), 2).unwrap();

        store.clear("1");

        assert!(store.list_items("1").is_empty());
        assert_eq!(store.get_quantity("2", "fries"), 2);
    }

    #[test]
    fn test_teardown_removes_cart() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("burger", 1099), 1).unwrap();
        store.teardown("5");
        assert!(store.cart("5").is_none());
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut store = CartStore::new();
        let item = catalog_item("burger", 1099);

        let r0 = store.revision("5");
        store.add_item("5", &item, 1).unwrap();
        let r1 = store.revision("5");
        assert!(r1 > r0);

        // Read-only calls do not bump the counter
        let _ = store.list_items("5");
        let _ = store.get_total("5");
        assert_eq!(store.revision("5"), r1);

        store.clear("5");
        assert!(store.revision("5") > r1);
    }

    #[test]
    fn test_quantity_limit_enforced() {
        let mut store = CartStore::new();
        let item = catalog_item("burger", 1099);

        assert!(matches!(
            store.add_item("5", &item, MAX_ITEM_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));

        store.add_item("5", &item, MAX_ITEM_QUANTITY).unwrap();
        assert!(matches!(
            store.add_item("5", &item, 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        // Failed mutation leaves the quantity unchanged
        assert_eq!(store.get_quantity("5", "burger"), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_extreme_merge_delta_hits_cap_not_overflow() {
        let mut store = CartStore::new();
        let item = catalog_item("burger", 1099);

        store.add_item("5", &item, 1).unwrap();
        assert!(matches!(
            store.add_item("5", &item, i64::MAX),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert_eq!(store.get_quantity("5", "burger"), 1);

        // An extreme negative delta behaves like any other drop to zero.
        store.add_item("5", &item, i64::MIN).unwrap();
        assert_eq!(store.get_quantity("5", "burger"), 0);
    }

    #[test]
    fn test_set_quantity_bounds_only_apply_to_present_lines() {
        let mut store = CartStore::new();
        store.add_item("5", &catalog_item("soup", 599), 1).unwrap();

        // Absent line: no-op regardless of how large the quantity is
        store
            .set_quantity("5", "ghost", MAX_ITEM_QUANTITY + 1)
            .unwrap();
        assert_eq!(store.get_quantity("5", "ghost"), 0);

        assert!(matches!(
            store.set_quantity("5", "soup", MAX_ITEM_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert_eq!(store.get_quantity("5", "soup"), 1);
    }

    #[test]
    fn test_cart_size_limit_enforced() {
        let mut store = CartStore::new();
        for i in 0..MAX_CART_ITEMS {
            store
                .add_item("5", &catalog_item(&format!("item-{i}"), 100), 1)
                .unwrap();
        }
        assert!(matches!(
            store.add_item("5", &catalog_item("overflow", 100), 1),
            Err(CoreError::CartTooLarge { .. })
        ));
    }
}
