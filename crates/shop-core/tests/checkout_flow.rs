//! End-to-end checkout scenarios through the public API.

use shop_core::{Cart, MemorySink, Product, ReceiptFormat, User, WriterSink};

#[test]
fn test_laptop_and_mouse_purchase() {
    let laptop = Product::new("Laptop", 1200.0, 1);
    let mouse = Product::new("Mouse", 20.0, 2);

    let mut user = User::new("Juan", "juan@example.com");
    user.add_product_to_cart(laptop);
    user.add_product_to_cart(mouse);

    let mut sink = MemorySink::new();
    let receipt = user.finalize_purchase(&mut sink).unwrap();

    assert_eq!(receipt.total, 1240.0);
    assert_eq!(
        sink.lines,
        vec!["Usuario Juan ha realizado una compra por un total de 1240€"]
    );
    assert_eq!(user.cart().total(), 0.0);
}

#[test]
fn test_repeat_finalize_reports_zero() {
    let mut user = User::new("Juan", "juan@example.com");
    user.add_product_to_cart(Product::new("Laptop", 1200.0, 1));

    let mut sink = MemorySink::new();
    user.finalize_purchase(&mut sink).unwrap();
    user.finalize_purchase(&mut sink).unwrap();

    assert_eq!(
        sink.lines,
        vec![
            "Usuario Juan ha realizado una compra por un total de 1200€",
            "Usuario Juan ha realizado una compra por un total de 0€",
        ]
    );
}

#[test]
fn test_cart_reused_after_purchase() {
    let mut user = User::new("Ana", "ana@example.com");
    user.add_product_to_cart(Product::new("Mouse", 20.0, 2));

    let mut sink = MemorySink::new();
    user.finalize_purchase(&mut sink).unwrap();

    user.add_product_to_cart(Product::new("Keyboard", 45.5, 1));
    let receipt = user.finalize_purchase(&mut sink).unwrap();

    assert_eq!(receipt.total, 45.5);
    assert_eq!(
        sink.last(),
        Some("Usuario Ana ha realizado una compra por un total de 45.5€")
    );
}

#[test]
fn test_zero_quantity_product() {
    let mut user = User::new("Juan", "juan@example.com");
    user.add_product_to_cart(Product::new("Monitor", 300.0, 0));

    let mut sink = MemorySink::new();
    let receipt = user.finalize_purchase(&mut sink).unwrap();

    assert_eq!(receipt.total, 0.0);
}

#[test]
fn test_cart_total_matches_sum_of_lines() {
    let products = vec![
        Product::new("Laptop", 1200.0, 1),
        Product::new("Mouse", 20.0, 2),
        Product::new("Voucher", -100.0, 1),
        Product::new("Sticker", 0.0, 5),
    ];
    let expected: f64 = products.iter().map(Product::line_total).sum();

    let mut cart = Cart::new();
    for product in products {
        cart.add_product(product);
    }

    assert_eq!(cart.total(), expected);
    assert_eq!(cart.total(), 1140.0);
}

#[test]
fn test_users_have_independent_carts() {
    let mut juan = User::new("Juan", "juan@example.com");
    let mut ana = User::new("Ana", "ana@example.com");
    let mouse = Product::new("Mouse", 20.0, 2);

    juan.add_product_to_cart(mouse.clone());
    ana.add_product_to_cart(mouse);

    let mut sink = WriterSink::new(Vec::new(), ReceiptFormat::Text);
    juan.finalize_purchase(&mut sink).unwrap();

    assert!(juan.cart().is_empty());
    assert_eq!(ana.cart().total(), 40.0);
}
