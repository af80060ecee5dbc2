//! Login/register panel toggle.
//!
//! Pure UI-state component switching visibility between the two form
//! panels. There is no real authentication: login always reports success,
//! and registration only performs a client-side password-confirmation
//! match.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::notification::{NotificationCenter, NotificationKind};
use crate::view::StorefrontView;

/// Which form panel is visible. Not persisted across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PanelState {
    #[default]
    ShowingLogin,
    ShowingRegister,
}

/// The login/register panel and its form submissions.
pub struct AuthPanel {
    state: PanelState,
    view: Arc<dyn StorefrontView>,
    notifications: Arc<NotificationCenter>,
}

impl AuthPanel {
    pub fn new(view: Arc<dyn StorefrontView>, notifications: Arc<NotificationCenter>) -> Self {
        Self {
            state: PanelState::ShowingLogin,
            view,
            notifications,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Switches visibility to the register form.
    pub fn show_register(&mut self) {
        self.state = PanelState::ShowingRegister;
        self.view.show_register_panel();
    }

    /// Switches visibility to the login form.
    pub fn show_login(&mut self) {
        self.state = PanelState::ShowingLogin;
        self.view.show_login_panel();
    }

    /// Login form submission. Always reports success; there is no
    /// credential check by design.
    pub fn submit_login(&self) {
        self.notifications
            .notify("Login successful!", NotificationKind::Success);
    }

    /// Register form submission.
    ///
    /// A mismatched confirmation signals an error notification and aborts
    /// without resetting the form or leaving the register panel. A match
    /// signals success, clears the form, and switches back to the login
    /// panel. Returns whether registration was accepted.
    pub fn submit_register(&mut self, password: &str, confirm: &str) -> bool {
        if password != confirm {
            self.notifications
                .notify("Passwords do not match!", NotificationKind::Error);
            return false;
        }

        self.notifications
            .notify("Account created successfully!", NotificationKind::Success);
        self.view.clear_register_form();
        self.state = PanelState::ShowingLogin;
        self.view.show_login_panel();
        true
    }
}
