//! File-backed cart state repository.
//!
//! Persists the cart and the quantity map as two JSON slots under the
//! platform data directory. Reading is forgiving: missing or malformed
//! slots are treated as absence and replaced with defaults, never
//! surfaced.

use std::path::Path;

use async_trait::async_trait;
use shopfront_core::cart::{Cart, CartState, CartStateRepository, QuantityMap};
use shopfront_core::catalog::Catalog;
use shopfront_core::error::{Result, ShopfrontError};

use crate::dto::{CartSlotV1, QuantitySlotV1};
use crate::paths::ShopfrontPaths;
use crate::storage::AtomicJsonFile;

/// Repository persisting cart state to two JSON slot files.
#[derive(Clone)]
pub struct FileCartStateRepository {
    catalog: Catalog,
    cart_slot: AtomicJsonFile<CartSlotV1>,
    quantity_slot: AtomicJsonFile<QuantitySlotV1>,
}

impl FileCartStateRepository {
    /// Creates a repository over the platform state directory.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let state_dir = ShopfrontPaths::state_dir()
            .map_err(|e| ShopfrontError::config(e.to_string()))?;
        Ok(Self::with_state_dir(catalog, &state_dir))
    }

    /// Creates a repository over an explicit state directory.
    pub fn with_state_dir(catalog: Catalog, state_dir: &Path) -> Self {
        Self {
            catalog,
            cart_slot: AtomicJsonFile::new(state_dir.join("cart.json")),
            quantity_slot: AtomicJsonFile::new(state_dir.join("quantities.json")),
        }
    }
}

#[async_trait]
impl CartStateRepository for FileCartStateRepository {
    async fn load(&self) -> Result<CartState> {
        let cart_slot = self.cart_slot.clone();
        let quantity_slot = self.quantity_slot.clone();

        let (cart_result, quantity_result) = tokio::task::spawn_blocking(move || {
            (cart_slot.load(), quantity_slot.load())
        })
        .await
        .map_err(|e| ShopfrontError::internal(format!("Failed to join task: {}", e)))?;

        let cart = match cart_result {
            Ok(Some(slot)) => Cart::from(slot),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!("discarding unreadable cart slot: {}", e);
                Cart::new()
            }
        };

        let mut quantities = match quantity_result {
            Ok(Some(slot)) => QuantityMap::from(slot),
            Ok(None) => QuantityMap::zeroed(&self.catalog),
            Err(e) => {
                tracing::warn!("discarding unreadable quantity slot: {}", e);
                QuantityMap::zeroed(&self.catalog)
            }
        };
        quantities.fill_missing(&self.catalog);

        Ok(CartState { cart, quantities })
    }

    async fn save(&self, state: &CartState) -> Result<()> {
        let cart_slot = self.cart_slot.clone();
        let quantity_slot = self.quantity_slot.clone();
        let cart_dto = CartSlotV1::from(&state.cart);
        let quantity_dto = QuantitySlotV1::from(&state.quantities);

        tokio::task::spawn_blocking(move || {
            cart_slot
                .save(&cart_dto)
                .map_err(|e| ShopfrontError::data_access(format!("cart slot: {}", e)))?;
            quantity_slot
                .save(&quantity_dto)
                .map_err(|e| ShopfrontError::data_access(format!("quantity slot: {}", e)))
        })
        .await
        .map_err(|e| ShopfrontError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn build_repository(dir: &TempDir) -> FileCartStateRepository {
        FileCartStateRepository::with_state_dir(Catalog::builtin(), dir.path())
    }

    #[tokio::test]
    async fn test_load_defaults_when_nothing_stored() {
        let dir = TempDir::new().unwrap();
        let repository = build_repository(&dir);

        let state = repository.load().await.unwrap();

        assert!(state.cart.is_empty());
        assert_eq!(
            state.quantities.iter().count(),
            Catalog::builtin().products().len()
        );
        assert!(state.quantities.iter().all(|(_, count)| count == 0));
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let repository = build_repository(&dir);

        let catalog = Catalog::builtin();
        let mut state = CartState::default_for(&catalog);
        state.cart.add("plate", "Eco-Friendly Plates", 19, 2);
        state.quantities.increment("fork");

        repository.save(&state).await.unwrap();
        let loaded = repository.load().await.unwrap();

        assert_eq!(loaded, state);
        assert!(dir.path().join("cart.json").exists());
        assert!(dir.path().join("quantities.json").exists());
    }

    #[tokio::test]
    async fn test_malformed_slots_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cart.json"), "{ definitely not json").unwrap();
        std::fs::write(dir.path().join("quantities.json"), "[1, 2, 3]").unwrap();

        let repository = build_repository(&dir);
        let state = repository.load().await.unwrap();

        assert!(state.cart.is_empty());
        assert!(state.quantities.iter().all(|(_, count)| count == 0));
    }

    #[tokio::test]
    async fn test_load_fills_missing_catalog_entries() {
        let dir = TempDir::new().unwrap();
        // A quantity slot from before a catalog addition.
        std::fs::write(
            dir.path().join("quantities.json"),
            r#"{"schemaVersion": "1.0.0", "counts": {"plate": 2}}"#,
        )
        .unwrap();

        let repository = build_repository(&dir);
        let state = repository.load().await.unwrap();

        assert_eq!(state.quantities.get("plate"), 2);
        assert_eq!(state.quantities.get("protein-salad"), 0);
    }

    #[tokio::test]
    async fn test_persisted_state_survives_new_repository() {
        let dir = TempDir::new().unwrap();

        let catalog = Catalog::builtin();
        let mut state = CartState::default_for(&catalog);
        state.cart.add("spoon", "Compostable Spoons", 6, 4);
        build_repository(&dir).save(&state).await.unwrap();

        // A fresh handle over the same directory sees the same state,
        // the reload-reconstructs-prior-state contract.
        let reloaded = build_repository(&dir).load().await.unwrap();
        assert_eq!(reloaded.cart.item_count(), 4);
    }
}
