//! # Product Types
//!
//! Line items for checkout-rs and the optional product catalog.
//! Catalogs are TOML files with one `[[products]]` table per entry.

use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A purchasable line item: name, unit price and quantity.
///
/// Fields are fixed at construction. Nothing is validated, so negative
/// or NaN prices flow straight into the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    name: String,

    /// Price of a single unit, in euros
    unit_price: f64,

    /// Number of units
    quantity: i64,
}

impl Product {
    /// Create a product
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of one unit
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Number of units
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Calculate the total for this line (unit price × quantity)
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Find a product by name
    pub fn get(&self, name: &str) -> ShopResult<&Product> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ShopError::ProductNotFound {
                name: name.to_string(),
            })
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> ShopResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load catalog from a TOML file on disk
    pub fn from_file(path: impl AsRef<Path>) -> ShopResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShopError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            products = catalog.products.len(),
            "Loaded product catalog"
        );
        Ok(catalog)
    }
}
