//! The central state manager for the cart and quantity selectors.
//!
//! Encapsulates the page-lifetime mutable state behind explicit methods:
//! every mutation re-renders through the view adapter and is mirrored to
//! durable storage before the call returns.

use std::sync::Arc;

use crate::cart::model::{Cart, CartSnapshot, CartState};
use crate::cart::repository::CartStateRepository;
use crate::catalog::Catalog;
use crate::error::{Result, ShopfrontError};
use crate::notification::{NotificationCenter, NotificationKind};
use crate::view::StorefrontView;

/// Manages cart line items and per-product pending quantities.
pub struct CartManager {
    catalog: Catalog,
    state: CartState,
    repository: Arc<dyn CartStateRepository>,
    view: Arc<dyn StorefrontView>,
    notifications: Arc<NotificationCenter>,
}

impl CartManager {
    /// Creates a manager with default (empty) state.
    ///
    /// Call [`CartManager::restore`] afterwards to load persisted state
    /// and render the initial displays.
    pub fn new(
        catalog: Catalog,
        repository: Arc<dyn CartStateRepository>,
        view: Arc<dyn StorefrontView>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        let state = CartState::default_for(&catalog);
        Self {
            catalog,
            state,
            repository,
            view,
            notifications,
        }
    }

    /// Loads persisted state and renders the quantity displays and the
    /// cart panel.
    pub async fn restore(&mut self) -> Result<()> {
        self.state = self.repository.load().await?;
        self.state.quantities.fill_missing(&self.catalog);
        self.render_quantities();
        self.render_cart();
        tracing::debug!(
            items = self.state.cart.items().len(),
            "cart state restored"
        );
        Ok(())
    }

    /// Increments a product's pending quantity by one, re-renders its
    /// display, and persists. No upper bound is enforced. An unknown
    /// product id is rejected with a not-found error.
    pub async fn increment(&mut self, product: &str) -> Result<()> {
        if !self.catalog.contains(product) {
            return Err(ShopfrontError::not_found("product", product));
        }
        let quantity = self.state.quantities.increment(product);
        self.view.set_quantity(product, quantity);
        self.persist().await
    }

    /// Decrements a product's pending quantity by one, floored at zero.
    ///
    /// The no-op case (already at zero) still re-renders and persists.
    /// An unknown product id is rejected with a not-found error.
    pub async fn decrement(&mut self, product: &str) -> Result<()> {
        if !self.catalog.contains(product) {
            return Err(ShopfrontError::not_found("product", product));
        }
        let quantity = self.state.quantities.decrement(product);
        self.view.set_quantity(product, quantity);
        self.persist().await
    }

    /// Adds a product's pending quantity to the cart.
    ///
    /// A zero pending quantity triggers a warning notification and no
    /// mutation. Otherwise the quantity is merged into an existing line
    /// item for the same product or appended as a new line item with the
    /// catalog's current name/price snapshot; the pending quantity is
    /// zeroed, the cart and quantity displays re-render, and the state is
    /// persisted.
    pub async fn add_selected(&mut self, product: &str) -> Result<()> {
        let Some(entry) = self.catalog.get(product) else {
            return Err(ShopfrontError::not_found("product", product));
        };

        let quantity = self.state.quantities.get(product);
        if quantity == 0 {
            self.notifications
                .notify("Please select at least 1 item", NotificationKind::Warning);
            return Ok(());
        }

        let name = entry.name.clone();
        let price = entry.price;
        self.state.cart.add(product, &name, price, quantity);
        self.state.quantities.reset(product);

        self.view.set_quantity(product, 0);
        self.render_cart();
        self.notifications.notify(
            format!("{} {} added to cart!", quantity, name),
            NotificationKind::Success,
        );
        tracing::info!(product, quantity, "added to cart");
        self.persist().await
    }

    /// Empties the cart, zeroes all pending quantities, re-renders both
    /// displays, and persists. Idempotent.
    pub async fn clear(&mut self) -> Result<()> {
        self.state.cart.clear();
        self.state.quantities.reset_all();
        self.render_cart();
        self.render_quantities();
        self.persist().await
    }

    /// Renders the cart panel from the current state.
    pub fn render_cart(&self) {
        self.view.render_cart(&self.state.cart.snapshot());
    }

    /// Reflects every known product's pending quantity into the view.
    pub fn render_quantities(&self) {
        for (product, quantity) in self.state.quantities.iter() {
            self.view.set_quantity(product, quantity);
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    /// A product's current pending quantity.
    pub fn pending_quantity(&self, product: &str) -> u32 {
        self.state.quantities.get(product)
    }

    /// A render-ready snapshot of the cart panel.
    pub fn snapshot(&self) -> CartSnapshot {
        self.state.cart.snapshot()
    }

    async fn persist(&self) -> Result<()> {
        self.repository.save(&self.state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryRepository, RecordingView, ViewEvent};

    fn build_manager() -> (CartManager, Arc<RecordingView>, Arc<MemoryRepository>) {
        let view = Arc::new(RecordingView::default());
        let repository = Arc::new(MemoryRepository::default());
        let notifications = Arc::new(NotificationCenter::new(view.clone()));
        let manager = CartManager::new(
            Catalog::builtin(),
            repository.clone(),
            view.clone(),
            notifications,
        );
        (manager, view, repository)
    }

    #[tokio::test]
    async fn test_increment_renders_and_persists() {
        let (mut manager, view, repository) = build_manager();

        manager.increment("plate").await.unwrap();
        manager.increment("plate").await.unwrap();

        assert_eq!(manager.pending_quantity("plate"), 2);
        assert_eq!(repository.save_count(), 2);
        assert!(view
            .events()
            .contains(&ViewEvent::QuantitySet("plate".to_string(), 2)));
    }

    #[tokio::test]
    async fn test_decrement_at_zero_still_renders_and_persists() {
        let (mut manager, view, repository) = build_manager();

        manager.decrement("fork").await.unwrap();

        assert_eq!(manager.pending_quantity("fork"), 0);
        assert_eq!(repository.save_count(), 1);
        assert!(view
            .events()
            .contains(&ViewEvent::QuantitySet("fork".to_string(), 0)));
    }

    #[tokio::test]
    async fn test_unknown_product_is_rejected() {
        let (mut manager, _view, repository) = build_manager();

        assert!(manager.increment("napkin").await.unwrap_err().is_not_found());
        assert!(manager.decrement("napkin").await.unwrap_err().is_not_found());
        assert!(manager
            .add_selected("napkin")
            .await
            .unwrap_err()
            .is_not_found());

        assert_eq!(repository.save_count(), 0);
        assert!(manager.cart().is_empty());
    }

    #[tokio::test]
    async fn test_add_selected_with_zero_warns_and_leaves_state() {
        let (mut manager, view, repository) = build_manager();

        manager.add_selected("plate").await.unwrap();

        assert!(manager.cart().is_empty());
        assert_eq!(repository.save_count(), 0);
        assert!(view.events().contains(&ViewEvent::NotificationShown(
            "Please select at least 1 item".to_string(),
            NotificationKind::Warning,
        )));
    }

    #[tokio::test]
    async fn test_add_selected_merges_and_zeroes_pending() {
        let (mut manager, view, _repository) = build_manager();

        manager.increment("plate").await.unwrap();
        manager.increment("plate").await.unwrap();
        manager.add_selected("plate").await.unwrap();
        manager.increment("plate").await.unwrap();
        manager.add_selected("plate").await.unwrap();

        let cart = manager.cart();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(manager.pending_quantity("plate"), 0);

        assert!(view.events().contains(&ViewEvent::NotificationShown(
            "2 Eco-Friendly Plates added to cart!".to_string(),
            NotificationKind::Success,
        )));
    }

    #[tokio::test]
    async fn test_totals_follow_catalog_example() {
        let (mut manager, _view, _repository) = build_manager();

        manager.increment("plate").await.unwrap();
        manager.increment("plate").await.unwrap();
        manager.add_selected("plate").await.unwrap();
        manager.increment("fork").await.unwrap();
        manager.add_selected("fork").await.unwrap();

        assert_eq!(manager.cart().total(), 44);
        assert_eq!(manager.cart().item_count(), 3);
        assert_eq!(manager.snapshot().total_display, "44.00");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let (mut manager, _view, repository) = build_manager();

        manager.increment("spoon").await.unwrap();
        manager.add_selected("spoon").await.unwrap();
        manager.clear().await.unwrap();
        let after_first = repository.stored().unwrap();

        manager.clear().await.unwrap();
        let after_second = repository.stored().unwrap();

        assert!(after_first.cart.is_empty());
        assert_eq!(after_first, after_second);
    }

    #[tokio::test]
    async fn test_restore_renders_persisted_state() {
        let catalog = Catalog::builtin();
        let mut state = CartState::default_for(&catalog);
        state.cart.add("plate", "Eco-Friendly Plates", 19, 2);
        state.quantities.increment("fork");

        let view = Arc::new(RecordingView::default());
        let repository = Arc::new(MemoryRepository::with_state(state));
        let notifications = Arc::new(NotificationCenter::new(view.clone()));
        let mut manager =
            CartManager::new(catalog, repository, view.clone(), notifications);

        manager.restore().await.unwrap();

        assert_eq!(manager.cart().item_count(), 2);
        assert_eq!(manager.pending_quantity("fork"), 1);
        assert!(view
            .events()
            .contains(&ViewEvent::QuantitySet("fork".to_string(), 1)));
        assert!(view
            .events()
            .iter()
            .any(|e| matches!(e, ViewEvent::CartRendered(s) if s.item_count == 2)));
    }
}
