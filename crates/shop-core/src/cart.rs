//! # Cart
//!
//! Ordered collection of products owned by a single user.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Keeps products in the order they were added. The total is always the
/// sum of the line totals of whatever is currently in the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a product. Duplicates are kept as separate lines.
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(
            product = product.name(),
            line_total = product.line_total(),
            "Added product to cart"
        );
        self.items.push(product);
    }

    /// Calculate cart total
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |total, item| total + item.line_total())
    }

    /// Remove every product from the cart
    pub fn clear(&mut self) {
        tracing::debug!(removed = self.items.len(), "Cleared cart");
        self.items.clear();
    }

    /// Products in insertion order
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of lines in the cart
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(Product::quantity).sum()
    }
}
