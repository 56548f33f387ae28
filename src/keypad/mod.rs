//! Imperative shell: key events dispatched onto the pure core.
//!
//! A [`Session`] owns one calculator and one ledger and runs every key
//! press to completion synchronously. Errors that the UI should alert on
//! (division by zero, printing an empty ledger) come back as typed results.

use crate::core::{Calculator, ComputeError, HistoryLedger, Operator};
use crate::display;
use crate::receipt::{self, ReceiptError, ReceiptOptions};
use serde::{Deserialize, Serialize};

/// A discrete key on the calculator's input surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Key {
    /// `0`-`9` or `.`
    Digit(char),
    /// `+`, `-`, `×`, `÷`
    Op(Operator),
    /// `=`
    Equals,
    /// `CE`: clear the current entry only.
    ClearEntry,
    /// `C`: clear everything.
    ClearAll,
}

impl Key {
    /// Map a single character from the UI surface to a key.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            return Some(Self::Digit(c));
        }
        if c == '=' {
            return Some(Self::Equals);
        }
        Operator::from_symbol(c).map(Self::Op)
    }
}

/// One calculator with its ledger and receipt configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    calculator: Calculator,
    ledger: HistoryLedger,
    options: ReceiptOptions,
}

impl Session {
    /// Create a session with an empty calculator and ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one key press.
    ///
    /// The only error a key press can surface is a division by zero, which
    /// the UI reports and which leaves all state untouched.
    pub fn press(&mut self, key: Key) -> Result<(), ComputeError> {
        match key {
            Key::Digit(c) => {
                self.calculator.push_digit(c);
                Ok(())
            }
            Key::Op(op) => self.calculator.choose_operation(op, &mut self.ledger),
            Key::Equals => self.calculator.compute(&mut self.ledger).map(|_| ()),
            Key::ClearEntry => {
                self.calculator.clear_entry();
                Ok(())
            }
            Key::ClearAll => {
                self.calculator.clear_all();
                Ok(())
            }
        }
    }

    /// The formatted current operand, the lower display row.
    pub fn current_display(&self) -> String {
        display::operand(self.calculator.current_text())
    }

    /// The formatted pending line, the upper display row.
    ///
    /// Empty when no operation is pending.
    pub fn pending_display(&self) -> String {
        match self.calculator.operation() {
            Some(op) => display::pending_line(self.calculator.pending_text(), op),
            None => String::new(),
        }
    }

    /// Empty the history ledger.
    ///
    /// Callers confirm with the user before invoking this.
    pub fn clear_history(&mut self) {
        self.ledger.clear();
    }

    /// Render a receipt of the session's history.
    pub fn print_receipt(&self) -> Result<String, ReceiptError> {
        receipt::render(&self.ledger, &self.options)
    }

    /// Set the receipt header label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.options.label = label.into();
    }

    /// The underlying calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }
}
