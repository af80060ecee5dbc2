//! Terminal implementation of the view adapter.
//!
//! Renders the cart panel, quantity displays, confirmation panel, and
//! notifications as colored terminal output. A terminal has no element to
//! remove, so notification removal is skipped (best-effort rendering).

use colored::Colorize;
use shopfront_core::cart::CartSnapshot;
use shopfront_core::notification::{Notification, NotificationKind};
use shopfront_core::view::StorefrontView;

/// Colored line-oriented storefront view.
pub struct TerminalView {
    currency: String,
}

impl TerminalView {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl StorefrontView for TerminalView {
    fn set_quantity(&self, product: &str, quantity: u32) {
        println!("{}", format!("  {} -> {}", product, quantity).bright_black());
    }

    fn render_cart(&self, snapshot: &CartSnapshot) {
        println!("{}", "--- Your Cart ---".bright_magenta().bold());

        if snapshot.is_empty {
            println!("{}", "Your cart is empty".bright_black());
        } else {
            for line in &snapshot.lines {
                println!(
                    "{}  {}",
                    format!(
                        "{} ({}{} × {})",
                        line.name, self.currency, line.price, line.quantity
                    )
                    .white(),
                    format!("{}{}", self.currency, line.line_total_display).green(),
                );
            }
        }

        println!(
            "{}  {}",
            snapshot.count_label.bright_black(),
            format!("Total: {}{}", self.currency, snapshot.total_display)
                .bright_green()
                .bold(),
        );
    }

    fn show_confirmation(&self) {
        println!();
        println!("{}", "=== Order Confirmed ===".bright_green().bold());
        println!(
            "{}",
            "Thank you! Your order is being submitted.".bright_green()
        );
        println!("{}", "Type 'close' to dismiss this panel.".bright_black());
    }

    fn hide_confirmation(&self) {
        println!("{}", "(confirmation closed)".bright_black());
    }

    fn show_notification(&self, notification: &Notification) {
        let message = &notification.message;
        let line = match notification.kind {
            NotificationKind::Success => message.green().bold(),
            NotificationKind::Warning => message.yellow().bold(),
            NotificationKind::Error => message.red().bold(),
        };
        println!("{}", line);
    }

    fn show_login_panel(&self) {
        println!("{}", "--- Login ---".bright_magenta().bold());
        println!(
            "{}",
            "Type 'login <user> <password>' or 'show-register' to create an account."
                .bright_black()
        );
    }

    fn show_register_panel(&self) {
        println!("{}", "--- Register ---".bright_magenta().bold());
        println!(
            "{}",
            "Type 'register <user> <password> <confirm>' or 'show-login' to go back."
                .bright_black()
        );
    }

    fn clear_register_form(&self) {
        println!("{}", "(register form cleared)".bright_black());
    }
}
