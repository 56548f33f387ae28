//! Receipt rendering from the history ledger.
//!
//! A receipt is a plain-text document: a header with a configurable label
//! and a generated timestamp, one line per record in insertion order
//! (oldest first, unlike the on-screen history), and a total-count footer.

use crate::core::HistoryLedger;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ReceiptError;

/// Header label used when none is configured.
pub const DEFAULT_LABEL: &str = "Receipt";

/// Options controlling the receipt header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptOptions {
    /// Label printed on the first line, typically the shop name.
    pub label: String,
}

impl Default for ReceiptOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Render a receipt timestamped with the current local time.
///
/// Fails with [`ReceiptError::EmptyLedger`] when there is nothing to print.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{HistoryLedger, Operator};
/// use shopcalc::receipt::{self, ReceiptOptions};
///
/// let mut ledger = HistoryLedger::new();
/// ledger.append("5", Operator::Mul, "3", 15.0);
///
/// let doc = receipt::render(&ledger, &ReceiptOptions::default()).unwrap();
/// assert!(doc.contains("5 × 3 = 15"));
/// assert!(doc.ends_with("Total: 1 records\n"));
/// ```
pub fn render(ledger: &HistoryLedger, options: &ReceiptOptions) -> Result<String, ReceiptError> {
    render_at(ledger, options, Local::now())
}

/// Render a receipt with an explicit timestamp.
///
/// Deterministic variant of [`render`]; everything else is identical.
pub fn render_at(
    ledger: &HistoryLedger,
    options: &ReceiptOptions,
    printed_at: DateTime<Local>,
) -> Result<String, ReceiptError> {
    if ledger.is_empty() {
        return Err(ReceiptError::EmptyLedger);
    }

    let mut doc = String::new();
    doc.push_str(&options.label);
    doc.push('\n');
    doc.push_str(&printed_at.format("%Y-%m-%d %H:%M:%S").to_string());
    doc.push_str("\n\n");

    // Receipts list entries as they happened, oldest first.
    for record in ledger.oldest_first() {
        doc.push_str(&format!("{} {}\n", record.expression, record.result));
    }

    doc.push_str(&format!("\nTotal: {} records\n", ledger.len()));
    Ok(doc)
}
