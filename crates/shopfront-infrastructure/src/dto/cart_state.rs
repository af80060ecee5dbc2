//! Versioned DTOs for the two cart state slots.
//!
//! The wire format only needs to round-trip; `schema_version` is carried
//! so a future format change can fall back the way the config loader
//! does.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shopfront_core::cart::{Cart, CartLineItem, QuantityMap};

/// Current schema version for both slots.
pub const CART_SLOT_V1_VERSION: &str = "1.0.0";

fn default_schema_version() -> String {
    CART_SLOT_V1_VERSION.to_string()
}

/// One serialized cart line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemV1 {
    pub product: String,
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

impl From<&CartLineItem> for LineItemV1 {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product: item.product.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// The serialized cart slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSlotV1 {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub items: Vec<LineItemV1>,
}

impl From<&Cart> for CartSlotV1 {
    fn from(cart: &Cart) -> Self {
        Self {
            schema_version: default_schema_version(),
            items: cart.items().iter().map(LineItemV1::from).collect(),
        }
    }
}

impl From<CartSlotV1> for Cart {
    fn from(slot: CartSlotV1) -> Self {
        let mut cart = Cart::new();
        // Re-adding through the domain keeps the invariants: positive
        // quantities only, one line item per product.
        for item in slot.items {
            cart.add(&item.product, &item.name, item.price, item.quantity);
        }
        cart
    }
}

/// The serialized quantity map slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitySlotV1 {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub counts: BTreeMap<String, u32>,
}

impl From<&QuantityMap> for QuantitySlotV1 {
    fn from(quantities: &QuantityMap) -> Self {
        Self {
            schema_version: default_schema_version(),
            counts: quantities
                .iter()
                .map(|(id, count)| (id.to_string(), count))
                .collect(),
        }
    }
}

impl From<QuantitySlotV1> for QuantityMap {
    fn from(slot: QuantitySlotV1) -> Self {
        QuantityMap::from_counts(slot.counts)
    }
}
