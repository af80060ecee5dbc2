//! View adapter trait.
//!
//! All rendering goes through this thin interface so cart, quantity,
//! notification, and auth logic stays testable without any UI environment.

use crate::cart::model::CartSnapshot;
use crate::notification::Notification;

/// Thin adapter between the interaction layer and whatever surface
/// displays it.
///
/// Every method has an empty default body: a frontend with no surface for
/// a given element simply skips the render step. Rendering is best-effort
/// and never fails.
#[allow(unused_variables)]
pub trait StorefrontView: Send + Sync {
    /// Reflects a product's pending quantity into its display element.
    fn set_quantity(&self, product: &str, quantity: u32) {}

    /// Renders the cart panel: line items with subtotals, item count and
    /// grand total, or the empty-cart placeholder.
    fn render_cart(&self, snapshot: &CartSnapshot) {}

    /// Reveals the order confirmation panel and brings it into view.
    fn show_confirmation(&self) {}

    /// Hides the order confirmation panel.
    fn hide_confirmation(&self) {}

    /// Displays a transient notification.
    fn show_notification(&self, notification: &Notification) {}

    /// Removes a displayed notification.
    fn remove_notification(&self, notification: &Notification) {}

    /// Switches panel visibility to the login form.
    fn show_login_panel(&self) {}

    /// Switches panel visibility to the register form.
    fn show_register_panel(&self) {}

    /// Clears the register form's inputs.
    fn clear_register_form(&self) {}
}

/// A view with no surfaces at all; every render is skipped.
///
/// Useful for headless operation and as a base for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl StorefrontView for NullView {}
