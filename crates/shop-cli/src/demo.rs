//! # Demo Checkout
//!
//! The single purchase the binary performs.

use crate::config::DemoConfig;
use shop_core::{Product, ProductCatalog, Receipt, ReceiptSink, ShopError, ShopResult, User};
use tracing::{info, instrument};

/// Products for the demo purchase: the whole catalog when one is
/// configured, otherwise a laptop and two mice.
pub fn demo_products(config: &DemoConfig) -> ShopResult<Vec<Product>> {
    match config.catalog_path() {
        Some(path) => {
            let catalog = ProductCatalog::from_file(path)?;
            info!(
                path = %path.display(),
                products = catalog.products.len(),
                "Using product catalog"
            );
            Ok(catalog.products)
        }
        None => Ok(vec![
            Product::new("Laptop", 1200.0, 1),
            Product::new("Mouse", 20.0, 2),
        ]),
    }
}

/// Fill a fresh user's cart and finalize one purchase into `sink`
#[instrument(skip(config, sink), fields(user = %config.user_name))]
pub fn run_checkout<S>(config: &DemoConfig, sink: &mut S) -> ShopResult<Receipt>
where
    S: ReceiptSink + ?Sized,
{
    let mut user = User::new(&config.user_name, &config.user_email);

    for product in demo_products(config)? {
        user.add_product_to_cart(product);
    }

    user.finalize_purchase(sink)
}

/// Exit status for a failed run: 2 for problems the operator can fix
/// (configuration, catalog contents), 1 for everything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ShopError>() {
        Some(shop_err) if shop_err.is_user_error() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::MemorySink;

    #[test]
    fn test_default_demo_purchase() {
        let config = DemoConfig::default();
        let mut sink = MemorySink::new();

        let receipt = run_checkout(&config, &mut sink).unwrap();

        assert_eq!(receipt.total, 1240.0);
        assert_eq!(receipt.user_email, "juan@example.com");
        assert_eq!(
            sink.lines,
            vec!["Usuario Juan ha realizado una compra por un total de 1240€"]
        );
    }

    #[test]
    fn test_catalog_demo_purchase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.toml");
        std::fs::write(
            &path,
            r#"
            [[products]]
            name = "Keyboard"
            unit_price = 45.5
            quantity = 2
            "#,
        )
        .unwrap();

        let config = DemoConfig {
            catalog_path: Some(path),
            user_name: "Ana".to_string(),
            ..DemoConfig::default()
        };
        let mut sink = MemorySink::new();

        let receipt = run_checkout(&config, &mut sink).unwrap();

        assert_eq!(receipt.total, 91.0);
        assert_eq!(
            sink.last(),
            Some("Usuario Ana ha realizado una compra por un total de 91€")
        );
    }

    #[test]
    fn test_exit_codes() {
        let config_err = anyhow::Error::from(ShopError::Configuration("bad".into()));
        assert_eq!(exit_code(&config_err), 2);

        let catalog_err = anyhow::Error::from(ShopError::CatalogParse("line 1".into()));
        assert_eq!(exit_code(&catalog_err), 2);

        let output_err = anyhow::Error::from(ShopError::Output("broken pipe".into()));
        assert_eq!(exit_code(&output_err), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("unexpected")), 1);
    }

    #[test]
    fn test_bad_catalog_is_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.toml");
        std::fs::write(&path, "[[products]]\nname = 3\n").unwrap();

        let config = DemoConfig {
            catalog_path: Some(path),
            ..DemoConfig::default()
        };
        let mut sink = MemorySink::new();

        let err = anyhow::Error::from(run_checkout(&config, &mut sink).unwrap_err());
        assert_eq!(exit_code(&err), 2);
        assert!(sink.lines.is_empty());
    }
}
