//! Data transfer objects for the durable storage slots.

pub mod cart_state;

pub use cart_state::{CartSlotV1, LineItemV1, QuantitySlotV1, CART_SLOT_V1_VERSION};
