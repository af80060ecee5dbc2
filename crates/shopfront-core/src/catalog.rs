//! Product catalog domain models.
//!
//! The catalog is fixed and compiled in: products are defined at load time
//! and never created or destroyed at runtime.

use serde::{Deserialize, Serialize};

/// Product identifiers in display order.
pub const PRODUCT_IDS: [&str; 6] = [
    "plate",
    "fork",
    "spoon",
    "green-salad",
    "happy-salad",
    "protein-salad",
];

/// A single product: identifier, display name, and unit price in whole
/// currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier (string key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: u32,
}

impl Product {
    fn new(id: &str, name: &str, price: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// The fixed product catalog.
///
/// Iteration order is stable definition order; lookups are linear scans
/// over the small fixed product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Returns the compiled-in storefront catalog.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new("plate", "Eco-Friendly Plates", 19),
                Product::new("fork", "Biodegradable Forks", 6),
                Product::new("spoon", "Compostable Spoons", 6),
                Product::new("green-salad", "Green Salad (250g)", 350),
                Product::new("happy-salad", "Happy Salad (250g)", 350),
                Product::new("protein-salad", "Protein Pro Salad (250g)", 550),
            ],
        }
    }

    /// Gets a product by its identifier.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns true if a product with the given identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns all products in definition order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
