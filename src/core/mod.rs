//! Core calculator types and logic.
//!
//! This module contains the pure core of the calculator:
//! - Operand entry via the bounded [`OperandBuffer`]
//! - The four binary operators and their arithmetic
//! - The [`Calculator`] input state machine
//! - The append-only [`HistoryLedger`]
//!
//! Nothing here touches a display, a clock, or any other side effect,
//! following the "pure core, imperative shell" philosophy.

mod calculator;
mod ledger;
mod operand;
mod operator;

pub use calculator::{Calculator, ComputeOutcome, Phase};
pub use ledger::{HistoryLedger, HistoryRecord};
pub use operand::{parse_operand, OperandBuffer, OperandError, MAX_OPERAND_LEN};
pub use operator::{ComputeError, Operator};
