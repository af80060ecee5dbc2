//! Interactive terminal storefront.
//!
//! Wires readline input events into the core stores: quantity selectors,
//! cart manager, order flow, and the login/register panel. All state
//! mutation happens synchronously within one command dispatch; the only
//! background work is the two fire-and-forget deferred actions.

mod scheduler;
mod view;

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use shopfront_core::auth::AuthPanel;
use shopfront_core::cart::{CartManager, CartStateRepository};
use shopfront_core::catalog::Catalog;
use shopfront_core::notification::{NotificationCenter, NotificationKind};
use shopfront_core::order::{OrderFlow, OrderGateway};
use shopfront_infrastructure::{FileCartStateRepository, HttpOrderGateway, ShopfrontConfig};

use crate::scheduler::{schedule_order_dispatch, TokioDismissScheduler};
use crate::view::TerminalView;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/shop".to_string(),
                "/login".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Which page's wiring is active, the analog of the per-page init paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Order,
    Login,
}

/// Command failures never tear down the loop; they are reported and the
/// prompt returns.
fn report(result: shopfront_core::error::Result<()>) {
    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red());
    }
}

fn print_help(page: Page) {
    println!("{}", "Pages: /shop  /login".bright_black());
    match page {
        Page::Order => println!(
            "{}",
            "Order: + <product>, - <product>, add <product>, cart, checkout, close, clear"
                .bright_black()
        ),
        Page::Login => println!(
            "{}",
            "Login: login <user> <password>, show-register, register <user> <password> <confirm>"
                .bright_black()
        ),
    }
    println!(
        "{}",
        "Other: contact <message>, /help, quit".bright_black()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("shopfront interaction layer loaded");

    // ===== Backend Initialization =====
    let config = ShopfrontConfig::load()?;
    let catalog = Catalog::builtin();

    let view = Arc::new(TerminalView::new(config.currency.clone()));
    let scheduler = Arc::new(TokioDismissScheduler::new());
    let notifications =
        Arc::new(NotificationCenter::new(view.clone()).with_scheduler(scheduler.clone()));
    scheduler.bind(&notifications);

    let repository: Arc<dyn CartStateRepository> =
        Arc::new(FileCartStateRepository::new(catalog.clone())?);
    let gateway: Arc<dyn OrderGateway> =
        Arc::new(HttpOrderGateway::new(config.order_endpoint.clone()));

    let mut cart = CartManager::new(
        catalog.clone(),
        repository,
        view.clone(),
        notifications.clone(),
    );
    let mut order_flow = OrderFlow::new(config.currency, view.clone(), notifications.clone());
    let mut auth = AuthPanel::new(view.clone(), notifications.clone());

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Shopfront ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/shop' to browse, '/login' for your account, '/help' for commands, or 'quit' to exit."
            .bright_black()
    );
    println!();

    // Restore persisted state and render the order page displays.
    let mut page = Page::Order;
    cart.restore().await?;

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let mut parts = trimmed.split_whitespace();
                let command = parts.next().unwrap_or_default();
                let args: Vec<&str> = parts.collect();

                match (command, page) {
                    ("/help", _) => print_help(page),
                    ("/shop", _) => {
                        page = Page::Order;
                        cart.render_quantities();
                        cart.render_cart();
                    }
                    ("/login", _) => {
                        page = Page::Login;
                        auth.show_login();
                    }
                    ("contact", _) => {
                        if args.is_empty() {
                            println!("{}", "Usage: contact <message>".bright_black());
                        } else {
                            notifications
                                .notify("Message sent successfully!", NotificationKind::Success);
                        }
                    }

                    ("+", Page::Order) if args.len() == 1 => {
                        report(cart.increment(args[0]).await);
                    }
                    ("-", Page::Order) if args.len() == 1 => {
                        report(cart.decrement(args[0]).await);
                    }
                    ("add", Page::Order) if args.len() == 1 => {
                        report(cart.add_selected(args[0]).await);
                    }
                    ("cart", Page::Order) => cart.render_cart(),
                    ("checkout", Page::Order) => match order_flow.submit(&mut cart).await {
                        Ok(Some(fields)) => {
                            // The user sees the confirmation before the form
                            // fires; the handle is dropped, fire-and-forget.
                            drop(schedule_order_dispatch(gateway.clone(), fields));
                        }
                        Ok(None) => {}
                        Err(e) => report(Err(e)),
                    },
                    ("close", Page::Order) => order_flow.dismiss_confirmation(),
                    ("clear", Page::Order) => report(cart.clear().await),

                    ("show-register", Page::Login) => auth.show_register(),
                    ("show-login", Page::Login) => auth.show_login(),
                    ("login", Page::Login) if args.len() == 2 => auth.submit_login(),
                    ("register", Page::Login) if args.len() == 3 => {
                        auth.submit_register(args[1], args[2]);
                    }

                    _ => println!("{}", "Unknown command".bright_black()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
