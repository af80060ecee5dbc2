//! Order submission flow.
//!
//! A two-state machine per submission cycle: `Idle` until a non-empty cart
//! is submitted, then `Confirmed`. Submission serializes a human-readable
//! order summary and the numeric total into the two order form fields,
//! reveals the confirmation panel, clears the cart, and leaves the actual
//! dispatch to a deferred, fire-and-forget gateway call.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::cart::model::two_decimal;
use crate::cart::CartManager;
use crate::error::Result;
use crate::notification::{NotificationCenter, NotificationKind};
use crate::view::StorefrontView;

/// Delay between showing the confirmation and dispatching the form, so the
/// user sees the confirmation before submission proceeds.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// The two hidden order form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    /// Plain-text order summary.
    pub details: String,
    /// Grand total as a two-decimal string.
    pub total: String,
}

/// Dispatches populated order fields to the configured external endpoint.
///
/// Implementations do not retry; a failed dispatch surfaces as a gateway
/// error, which the fire-and-forget dispatch site logs and drops so the
/// failure stays invisible to the interaction layer.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, fields: &OrderFields) -> Result<()>;
}

/// Order flow state within a submission cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OrderPhase {
    /// Waiting for a submission.
    #[default]
    Idle,
    /// A non-empty cart was submitted this cycle.
    Confirmed,
}

/// Drives order submission and the confirmation panel.
pub struct OrderFlow {
    phase: OrderPhase,
    currency: String,
    view: Arc<dyn StorefrontView>,
    notifications: Arc<NotificationCenter>,
}

impl OrderFlow {
    pub fn new(
        currency: impl Into<String>,
        view: Arc<dyn StorefrontView>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            phase: OrderPhase::Idle,
            currency: currency.into(),
            view,
            notifications,
        }
    }

    /// Submits the current cart.
    ///
    /// An empty cart is rejected with a warning notification; the flow
    /// stays `Idle` and nothing changes. Otherwise the populated order
    /// fields are returned for deferred dispatch, the confirmation panel
    /// is revealed, the cart is cleared, and the flow moves to
    /// `Confirmed`.
    pub async fn submit(&mut self, cart: &mut CartManager) -> Result<Option<OrderFields>> {
        if cart.cart().is_empty() {
            self.notifications
                .notify("Your cart is empty!", NotificationKind::Warning);
            return Ok(None);
        }

        let fields = self.build_fields(cart);
        self.view.show_confirmation();
        cart.clear().await?;
        self.phase = OrderPhase::Confirmed;
        tracing::info!(total = %fields.total, "order confirmed");

        Ok(Some(fields))
    }

    /// Hides the confirmation panel. Purely visual: the order-flow state
    /// is untouched.
    pub fn dismiss_confirmation(&self) {
        self.view.hide_confirmation();
    }

    pub fn phase(&self) -> OrderPhase {
        self.phase
    }

    /// Builds the plain-text summary and two-decimal total for the form
    /// fields: one line per item (`quantity × name - price`), then a
    /// trailing total line.
    fn build_fields(&self, cart: &CartManager) -> OrderFields {
        let mut details = String::from("ORDER DETAILS:\n\n");
        for item in cart.cart().items() {
            details.push_str(&format!(
                "{} × {} - {}{}\n",
                item.quantity,
                item.name,
                self.currency,
                item.line_total()
            ));
        }
        details.push_str(&format!("\nTOTAL: {}{}", self.currency, cart.cart().total()));

        OrderFields {
            details,
            total: two_decimal(cart.cart().total()),
        }
    }
}
