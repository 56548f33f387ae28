//! Shopcalc: a calculator engine with a transaction-style history ledger.
//!
//! Shopcalc follows a "pure core, imperative shell" design. The core is the
//! calculator's input state machine and the append-only ledger it feeds:
//! plain data and synchronous transitions with no side effects. The shell
//! layers (keypad dispatch, receipt rendering, the offline asset cache) sit
//! around that core and own the clock and the user-facing surfaces.
//!
//! # Core Concepts
//!
//! - **Operands as text**: digits are keyed into a bounded text buffer and
//!   only parsed when a computation needs the value
//! - **One pending operation**: chained evaluation left to right, no
//!   precedence
//! - **Ledger**: every successful compute appends an immutable record;
//!   newest-first for the screen, oldest-first for the printed receipt
//!
//! # Example
//!
//! ```rust
//! use shopcalc::core::{Calculator, ComputeOutcome, HistoryLedger, Operator};
//!
//! let mut calc = Calculator::new();
//! let mut ledger = HistoryLedger::new();
//!
//! for c in "0.1".chars() {
//!     calc.push_digit(c);
//! }
//! calc.choose_operation(Operator::Add, &mut ledger).unwrap();
//! for c in "0.2".chars() {
//!     calc.push_digit(c);
//! }
//!
//! let outcome = calc.compute(&mut ledger).unwrap();
//! assert_eq!(outcome, ComputeOutcome::Evaluated(0.3));
//! assert_eq!(ledger.records()[0].expression, "0.1 + 0.2 =");
//! ```

pub mod cache;
pub mod core;
pub mod display;
pub mod keypad;
pub mod receipt;

// Re-export commonly used types
pub use core::{Calculator, ComputeError, ComputeOutcome, HistoryLedger, HistoryRecord, Operator};
pub use keypad::{Key, Session};
pub use receipt::{ReceiptError, ReceiptOptions};
