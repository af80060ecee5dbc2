//! Cart domain models.
//!
//! Contains the cart line items, the per-product pending quantity map, and
//! the combined state bundle that is mirrored to durable storage after
//! every mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Formats a whole-currency amount with two-decimal display precision.
pub fn two_decimal(amount: u32) -> String {
    format!("{:.2}", amount as f64)
}

/// A single line item in the cart.
///
/// Display name and unit price are snapshots taken from the catalog at the
/// time the line item is first created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product identifier.
    pub product: String,
    /// Display name snapshot.
    pub name: String,
    /// Unit price snapshot in whole currency units.
    pub price: u32,
    /// Quantity, always positive.
    pub quantity: u32,
}

impl CartLineItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> u32 {
        self.price * self.quantity
    }
}

/// An ordered sequence of cart line items, insertion order preserved.
///
/// Invariants: quantities are always positive and no two line items share
/// a product identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of a product to the cart.
    ///
    /// If a line item for the same product identifier already exists, its
    /// quantity is incremented and the stored name/price snapshot is kept.
    /// Otherwise a new line item is appended with the given snapshot.
    ///
    /// Zero quantities are rejected by the caller (`CartManager`); this
    /// method ignores them to preserve the positive-quantity invariant.
    pub fn add(&mut self, product: &str, name: &str, price: u32, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product == product) {
            existing.quantity += quantity;
        } else {
            self.items.push(CartLineItem {
                product: product.to_string(),
                name: name.to_string(),
                price,
                quantity,
            });
        }
    }

    /// Removes all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grand total: sum of line totals over all items.
    pub fn total(&self) -> u32 {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Item count: sum of quantities, not the number of line items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Builds a render-ready snapshot of the cart.
    pub fn snapshot(&self) -> CartSnapshot {
        let item_count = self.item_count();
        CartSnapshot {
            lines: self
                .items
                .iter()
                .map(|i| CartLineView {
                    name: i.name.clone(),
                    price: i.price,
                    quantity: i.quantity,
                    line_total_display: two_decimal(i.line_total()),
                })
                .collect(),
            item_count,
            count_label: format!(
                "{} {}",
                item_count,
                if item_count == 1 { "item" } else { "items" }
            ),
            total_display: two_decimal(self.total()),
            is_empty: self.items.is_empty(),
        }
    }
}

/// A single line item prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
    pub line_total_display: String,
}

/// A render-ready view of the cart panel.
///
/// An empty cart renders a placeholder message instead of a list; the
/// frontend checks `is_empty` for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub count_label: String,
    pub total_display: String,
    pub is_empty: bool,
}

/// Mapping from product identifier to a non-negative pending-selection
/// count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityMap {
    counts: BTreeMap<String, u32>,
}

impl QuantityMap {
    /// Creates a zero-filled map with one entry per catalog product.
    pub fn zeroed(catalog: &Catalog) -> Self {
        Self {
            counts: catalog
                .products()
                .iter()
                .map(|p| (p.id.clone(), 0))
                .collect(),
        }
    }

    /// Builds a map from raw (product id, count) pairs, as read from
    /// storage.
    pub fn from_counts(counts: BTreeMap<String, u32>) -> Self {
        Self { counts }
    }

    /// Returns the pending count for a product, zero when absent.
    pub fn get(&self, product: &str) -> u32 {
        self.counts.get(product).copied().unwrap_or(0)
    }

    /// Unconditionally increases a product's pending count by one.
    /// No upper bound is enforced.
    pub fn increment(&mut self, product: &str) -> u32 {
        let count = self.counts.entry(product.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Decreases a product's pending count by one, floored at zero.
    /// Returns the new count; decrementing zero is a no-op.
    pub fn decrement(&mut self, product: &str) -> u32 {
        let count = self.counts.entry(product.to_string()).or_insert(0);
        if *count > 0 {
            *count -= 1;
        }
        *count
    }

    /// Resets a single product's pending count to zero.
    pub fn reset(&mut self, product: &str) {
        if let Some(count) = self.counts.get_mut(product) {
            *count = 0;
        }
    }

    /// Resets every pending count to zero.
    pub fn reset_all(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    /// Fills in a zero entry for any catalog product missing from the map.
    pub fn fill_missing(&mut self, catalog: &Catalog) {
        for product in catalog.products() {
            self.counts.entry(product.id.clone()).or_insert(0);
        }
    }

    /// Iterates over (product id, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

/// The combined page-lifetime state: cart plus pending quantities.
///
/// Both parts are mirrored to durable storage after every mutation so a
/// restart reconstructs prior state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub cart: Cart,
    pub quantities: QuantityMap,
}

impl CartState {
    /// Creates the default state: empty cart, zero-filled quantity map
    /// with one entry per known product.
    pub fn default_for(catalog: &Catalog) -> Self {
        Self {
            cart: Cart::new(),
            quantities: QuantityMap::zeroed(catalog),
        }
    }
}
