//! Cart state: line items, pending quantities, and their manager.

pub mod manager;
pub mod model;
pub mod repository;

pub use manager::CartManager;
pub use model::{Cart, CartLineItem, CartSnapshot, CartState, QuantityMap};
pub use repository::CartStateRepository;
