//! # checkout-demo
//!
//! Runs one checkout and prints the receipt to stdout.
//!
//! ```bash
//! checkout-demo
//! # Usuario Juan ha realizado una compra por un total de 1240€
//!
//! RECEIPT_FORMAT=json RUST_LOG=debug checkout-demo
//! ```

use shop_cli::{exit_code, run_checkout, DemoConfig, LogFormat};
use shop_core::WriterSink;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("checkout-demo: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;

    // Logs go to stderr; stdout only carries receipts
    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    debug!(?config, "Loaded configuration");

    let mut sink = WriterSink::stdout(config.receipt_format);
    let receipt = run_checkout(&config, &mut sink)?;

    debug!(receipt_id = %receipt.id, "Checkout complete");

    Ok(())
}
