//! # User
//!
//! A shopper with exactly one cart and the purchase flow on top of it.

use crate::cart::Cart;
use crate::error::ShopResult;
use crate::product::Product;
use crate::receipt::{Receipt, ReceiptSink};
use tracing::{info, warn};

/// A user of the shop.
///
/// The cart is created with the user and never replaced; its contents
/// only change through the user's own methods.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    email: String,
    cart: Cart,
}

impl User {
    /// Create a user with an empty cart
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cart: Cart::new(),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Read-only view of the user's cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product to the user's cart
    pub fn add_product_to_cart(&mut self, product: Product) {
        self.cart.add_product(product);
    }

    /// Finalize the purchase.
    ///
    /// Always runs the same three steps: read the cart total, hand a
    /// receipt to `sink`, clear the cart. The cart is cleared even when the
    /// sink fails; the sink's error is returned afterwards.
    pub fn finalize_purchase<S>(&mut self, sink: &mut S) -> ShopResult<Receipt>
    where
        S: ReceiptSink + ?Sized,
    {
        let total = self.cart.total();
        let receipt = Receipt::new(&self.name, &self.email, total, self.cart.item_count());

        if self.cart.is_empty() {
            warn!(user = %self.name, "Finalizing purchase with an empty cart");
        }

        let emitted = sink.emit(&receipt);
        self.cart.clear();
        emitted?;

        info!(
            user = %self.name,
            receipt_id = %receipt.id,
            total,
            items = receipt.item_count,
            "Purchase finalized"
        );

        Ok(receipt)
    }
}
