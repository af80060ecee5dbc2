//! Shared test doubles for core unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::cart::model::{CartSnapshot, CartState};
use crate::cart::repository::CartStateRepository;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::notification::{Notification, NotificationKind};
use crate::view::StorefrontView;

/// Everything a view was asked to render, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    QuantitySet(String, u32),
    CartRendered(CartSnapshot),
    ConfirmationShown,
    ConfirmationHidden,
    NotificationShown(String, NotificationKind),
    NotificationRemoved(String),
    LoginPanelShown,
    RegisterPanelShown,
    RegisterFormCleared,
}

/// A view that records every render call for later assertions.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl StorefrontView for RecordingView {
    fn set_quantity(&self, product: &str, quantity: u32) {
        self.record(ViewEvent::QuantitySet(product.to_string(), quantity));
    }

    fn render_cart(&self, snapshot: &CartSnapshot) {
        self.record(ViewEvent::CartRendered(snapshot.clone()));
    }

    fn show_confirmation(&self) {
        self.record(ViewEvent::ConfirmationShown);
    }

    fn hide_confirmation(&self) {
        self.record(ViewEvent::ConfirmationHidden);
    }

    fn show_notification(&self, notification: &Notification) {
        self.record(ViewEvent::NotificationShown(
            notification.message.clone(),
            notification.kind,
        ));
    }

    fn remove_notification(&self, notification: &Notification) {
        self.record(ViewEvent::NotificationRemoved(notification.message.clone()));
    }

    fn show_login_panel(&self) {
        self.record(ViewEvent::LoginPanelShown);
    }

    fn show_register_panel(&self) {
        self.record(ViewEvent::RegisterPanelShown);
    }

    fn clear_register_form(&self) {
        self.record(ViewEvent::RegisterFormCleared);
    }
}

/// An in-memory cart state repository counting saves.
#[derive(Default)]
pub struct MemoryRepository {
    stored: Mutex<Option<CartState>>,
    saves: Mutex<u32>,
}

impl MemoryRepository {
    pub fn with_state(state: CartState) -> Self {
        Self {
            stored: Mutex::new(Some(state)),
            saves: Mutex::new(0),
        }
    }

    pub fn save_count(&self) -> u32 {
        *self.saves.lock().unwrap()
    }

    pub fn stored(&self) -> Option<CartState> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl CartStateRepository for MemoryRepository {
    async fn load(&self) -> Result<CartState> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| CartState::default_for(&Catalog::builtin())))
    }

    async fn save(&self, state: &CartState) -> Result<()> {
        *self.stored.lock().unwrap() = Some(state.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
