//! # Receipts
//!
//! The receipt produced when a purchase is finalized, and the sinks it is
//! written to.
//!
//! ```text
//! User::finalize_purchase ──► Receipt ──► ReceiptSink::emit
//!                                          ├── WriterSink (stdout, files)
//!                                          ├── MemorySink (tests)
//!                                          └── FnMut(&Receipt) closures
//! ```

use crate::error::{ShopError, ShopResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use uuid::Uuid;

/// Snapshot of a finalized purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    /// Name of the purchasing user
    pub user_name: String,

    /// Email of the purchasing user
    pub user_email: String,

    /// Cart total at the moment of purchase
    pub total: f64,

    /// Sum of quantities that were in the cart
    pub item_count: i64,

    /// Issued timestamp
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Create a new receipt with generated ID
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        total: f64,
        item_count: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            user_email: user_email.into(),
            total,
            item_count,
            issued_at: Utc::now(),
        }
    }
}

/// Renders the customer-facing receipt line. The total uses the plain
/// `f64` formatting, so whole amounts print without decimals.
impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Usuario {} ha realizado una compra por un total de {}€",
            self.user_name, self.total
        )
    }
}

/// How a receipt is rendered into a line of output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    /// The human-readable receipt line
    #[default]
    Text,
    /// One JSON object per receipt
    Json,
}

impl ReceiptFormat {
    /// Render a receipt as a single line (no trailing newline)
    pub fn render(&self, receipt: &Receipt) -> ShopResult<String> {
        match self {
            ReceiptFormat::Text => Ok(receipt.to_string()),
            ReceiptFormat::Json => Ok(serde_json::to_string(receipt)?),
        }
    }
}

impl FromStr for ReceiptFormat {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(ShopError::Configuration(format!(
                "unknown receipt format '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Destination for finalized receipts.
///
/// Keeps the output side effect out of `User`, so purchases can be
/// exercised without touching stdout.
pub trait ReceiptSink {
    /// Write a single receipt
    fn emit(&mut self, receipt: &Receipt) -> ShopResult<()>;
}

impl<F> ReceiptSink for F
where
    F: FnMut(&Receipt) -> ShopResult<()>,
{
    fn emit(&mut self, receipt: &Receipt) -> ShopResult<()> {
        self(receipt)
    }
}

/// Writes one rendered line per receipt to any `io::Write`
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    format: ReceiptFormat,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W, format: ReceiptFormat) -> Self {
        Self { writer, format }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    /// Sink writing to the process's standard output
    pub fn stdout(format: ReceiptFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ReceiptSink for WriterSink<W> {
    fn emit(&mut self, receipt: &Receipt) -> ShopResult<()> {
        let line = self.format.render(receipt)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects rendered receipt lines in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Last line emitted, if any
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl ReceiptSink for MemorySink {
    fn emit(&mut self, receipt: &Receipt) -> ShopResult<()> {
        self.lines.push(receipt.to_string());
        Ok(())
    }
}
