//! # Demo Configuration
//!
//! Settings for the checkout demo, loaded from environment variables
//! (and a `.env` file if present). With nothing set, the demo runs the
//! built-in Laptop + Mouse purchase and prints a text receipt.

use shop_core::{ReceiptFormat, ShopError, ShopResult};
use std::path::{Path, PathBuf};

/// Log output style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ShopError::Configuration(format!(
                "unknown log format '{}', expected pretty or json",
                other
            ))),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Product catalog to purchase from (`CATALOG_PATH`)
    pub catalog_path: Option<PathBuf>,
    /// Receipt rendering (`RECEIPT_FORMAT`)
    pub receipt_format: ReceiptFormat,
    /// Log rendering (`LOG_FORMAT`)
    pub log_format: LogFormat,
    /// Purchasing user's name (`SHOP_USER_NAME`)
    pub user_name: String,
    /// Purchasing user's email (`SHOP_USER_EMAIL`)
    pub user_email: String,
}

impl DemoConfig {
    /// Load from environment variables
    pub fn from_env() -> ShopResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. The catalog is opt-in: only a
    /// `CATALOG_PATH` value selects one, and that file must exist.
    pub fn from_lookup<F>(lookup: F) -> ShopResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = match lookup("CATALOG_PATH").map(PathBuf::from) {
            Some(path) if !path.is_file() => {
                return Err(ShopError::Configuration(format!(
                    "CATALOG_PATH {} does not exist",
                    path.display()
                )));
            }
            other => other,
        };

        let receipt_format: ReceiptFormat = lookup("RECEIPT_FORMAT")
            .map(|v| v.parse::<ReceiptFormat>())
            .transpose()?
            .unwrap_or_default();

        let log_format: LogFormat = lookup("LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            catalog_path,
            receipt_format,
            log_format,
            user_name: lookup("SHOP_USER_NAME").unwrap_or_else(|| "Juan".to_string()),
            user_email: lookup("SHOP_USER_EMAIL")
                .unwrap_or_else(|| "juan@example.com".to_string()),
        })
    }

    /// Configured catalog file, if any
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            receipt_format: ReceiptFormat::Text,
            log_format: LogFormat::Pretty,
            user_name: "Juan".to_string(),
            user_email: "juan@example.com".to_string(),
        }
    }
}
