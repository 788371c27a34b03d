//! # Shop Error Types
//!
//! Typed errors for the edges of the checkout flow.
//! Cart arithmetic never fails; these cover config, catalog files and receipt output.

use thiserror::Error;

/// Core error type for checkout-rs
#[derive(Debug, Error)]
pub enum ShopError {
    /// Configuration errors (bad env values, unreadable paths)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Product catalog could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    /// Product not found in catalog
    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    /// Receipt could not be written to its sink
    #[error("Output error: {0}")]
    Output(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShopError {
    /// Returns true if the error stems from input the operator can fix
    /// (env vars, catalog contents) rather than the runtime environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ShopError::Configuration(_)
                | ShopError::CatalogParse(_)
                | ShopError::ProductNotFound { .. }
        )
    }
}

impl From<std::io::Error> for ShopError {
    fn from(err: std::io::Error) -> Self {
        ShopError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ShopError {
    fn from(err: toml::de::Error) -> Self {
        ShopError::CatalogParse(err.to_string())
    }
}

/// Result type alias for checkout-rs operations
pub type ShopResult<T> = Result<T, ShopError>;
