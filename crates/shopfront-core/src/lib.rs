//! Shopfront core: the storefront interaction layer's domain logic.
//!
//! Cart and quantity state live behind [`cart::CartManager`]; all
//! rendering goes through the [`view::StorefrontView`] adapter and all
//! persistence through the [`cart::CartStateRepository`] trait, so the
//! logic is testable without a UI or a filesystem.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod notification;
pub mod order;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Re-export common error type
pub use error::ShopfrontError;
