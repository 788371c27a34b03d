//! # shop-cli
//!
//! Demo driver for checkout-rs.
//!
//! Builds a user, fills the cart either from a product catalog or from the
//! built-in Laptop + Mouse pair, and finalizes a single purchase.
//!
//! ## Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CATALOG_PATH` | unset (built-in products) | TOML catalog to purchase from |
//! | `RECEIPT_FORMAT` | `text` | `text` or `json` |
//! | `LOG_FORMAT` | `pretty` | `pretty` or `json` (stderr) |
//! | `SHOP_USER_NAME` | `Juan` | Purchasing user |
//! | `SHOP_USER_EMAIL` | `juan@example.com` | Purchasing user's email |
//!
//! Failures exit with status 2 for configuration or catalog problems and
//! 1 for anything else (for example a closed stdout).

pub mod config;
pub mod demo;

pub use config::{DemoConfig, LogFormat};
pub use demo::{demo_products, exit_code, run_checkout};
