//! Cart state repository trait.

use async_trait::async_trait;

use super::model::CartState;
use crate::error::Result;

/// Repository trait for cart state persistence.
///
/// Implementations own the two durable slots (serialized cart, serialized
/// quantity map). Malformed or missing stored data is treated as absence:
/// `load` returns the default state rather than an error in that case.
#[async_trait]
pub trait CartStateRepository: Send + Sync {
    /// Loads the persisted cart state.
    ///
    /// Returns the default state (empty cart, zero-filled quantity map
    /// with one entry per known product) when no prior data exists or
    /// the stored data cannot be parsed.
    async fn load(&self) -> Result<CartState>;

    /// Saves the cart state to the two durable slots.
    async fn save(&self, state: &CartState) -> Result<()>;
}
