//! # shop-core
//!
//! Core types for the checkout-rs checkout flow.
//!
//! This crate provides:
//! - `Product` and `ProductCatalog` for line items
//! - `Cart` for aggregating products
//! - `User` for adding to the cart and finalizing purchases
//! - `Receipt` and `ReceiptSink` for the purchase output
//! - `ShopError` for typed error handling at the edges
//!
//! ## Example
//!
//! ```rust
//! use shop_core::{MemorySink, Product, User};
//!
//! let mut user = User::new("Juan", "juan@example.com");
//! user.add_product_to_cart(Product::new("Laptop", 1200.0, 1));
//! user.add_product_to_cart(Product::new("Mouse", 20.0, 2));
//!
//! let mut sink = MemorySink::new();
//! let receipt = user.finalize_purchase(&mut sink)?;
//!
//! assert_eq!(receipt.total, 1240.0);
//! assert!(user.cart().is_empty());
//! # Ok::<(), shop_core::ShopError>(())
//! ```

pub mod cart;
pub mod error;
pub mod product;
pub mod receipt;
pub mod user;

// Re-exports for convenience
pub use cart::Cart;
pub use error::{ShopError, ShopResult};
pub use product::{Product, ProductCatalog};
pub use receipt::{MemorySink, Receipt, ReceiptFormat, ReceiptSink, WriterSink};
pub use user::User;
