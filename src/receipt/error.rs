//! Receipt error types.

use thiserror::Error;

/// Errors that can occur when producing a receipt.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReceiptError {
    /// The ledger holds no records, so there is nothing to print. Surfaced
    /// to the user; no document is generated.
    #[error("no records to print")]
    EmptyLedger,
}
