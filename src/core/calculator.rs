//! The calculator input state machine.
//!
//! Holds the pending (left) operand as text, the live entry buffer, an
//! optional pending operator, and a flag marking that the last action was a
//! compute. Every transition runs to completion synchronously; a successful
//! compute is the only path that appends to the ledger.

use super::ledger::HistoryLedger;
use super::operand::{parse_operand, OperandBuffer};
use super::operator::{ComputeError, Operator};
use serde::{Deserialize, Serialize};

/// The informal phase of the input state machine, derived from the fields.
///
/// Phases exist for display and diagnostics; the transition methods on
/// [`Calculator`] are the authoritative contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered yet, or everything cleared.
    Empty,
    /// Keying the first operand.
    EnteringFirst,
    /// An operator is pending and the entry buffer is empty.
    OperatorChosen,
    /// Keying the second operand.
    EnteringSecond,
    /// The last action was a compute; the buffer holds the result.
    Computed,
}

impl Phase {
    /// The phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::EnteringFirst => "EnteringFirst",
            Self::OperatorChosen => "OperatorChosen",
            Self::EnteringSecond => "EnteringSecond",
            Self::Computed => "Computed",
        }
    }
}

/// What a call to [`Calculator::compute`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComputeOutcome {
    /// The pending operation evaluated to this rounded result, and a record
    /// was appended to the ledger.
    Evaluated(f64),
    /// No pending operation, or an operand did not parse. Nothing changed
    /// and nothing was appended.
    NotReady,
}

/// Round a raw result to 8 decimal places, absorbing binary floating-point
/// representation error (`0.1 + 0.2` must come out `0.3`).
fn round_result(raw: f64) -> f64 {
    (raw * 1e8).round() / 1e8
}

/// The calculator's input state machine.
///
/// Transitions are invoked by discrete key events and never suspend or
/// block. The machine is initialized empty, mutated by every transition,
/// and only ever reset, never destroyed.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{Calculator, ComputeOutcome, HistoryLedger, Operator};
///
/// let mut calc = Calculator::new();
/// let mut ledger = HistoryLedger::new();
///
/// calc.push_digit('1');
/// calc.push_digit('2');
/// calc.choose_operation(Operator::Mul, &mut ledger).unwrap();
/// calc.push_digit('3');
///
/// let outcome = calc.compute(&mut ledger).unwrap();
/// assert_eq!(outcome, ComputeOutcome::Evaluated(36.0));
/// assert_eq!(calc.current_text(), "36");
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    pending: String,
    current: OperandBuffer,
    operation: Option<Operator>,
    just_computed: bool,
}

impl Calculator {
    /// Create a calculator in its initial empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit (or decimal point) to the current operand.
    ///
    /// Returns whether the character was accepted. The length cap and the
    /// single-decimal-point rule are checked against the buffer as it stands
    /// BEFORE any just-computed reset, so an over-long computed result keeps
    /// blocking fresh input until the entry is cleared. Entering a digit
    /// right after a compute replaces the result rather than extending it.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !self.current.accepts(c) {
            return false;
        }
        if self.just_computed {
            self.current.clear();
            self.just_computed = false;
        }
        self.current.push(c)
    }

    /// Select the pending operator, chaining any previous one.
    ///
    /// A silent no-op when the current operand is empty. When a pending
    /// operand already exists, the previous operation is evaluated first
    /// (left to right, no precedence); a division by zero there aborts the
    /// whole transition with no state change. On the normal path the current
    /// operand moves into the pending slot and the entry buffer empties.
    pub fn choose_operation(
        &mut self,
        op: Operator,
        ledger: &mut HistoryLedger,
    ) -> Result<(), ComputeError> {
        if self.current.is_empty() {
            return Ok(());
        }
        if !self.pending.is_empty() {
            self.compute(ledger)?;
        }
        self.operation = Some(op);
        self.pending = self.current.take();
        Ok(())
    }

    /// Clear the current entry only (the `CE` key).
    ///
    /// The pending operand and operation are untouched.
    pub fn clear_entry(&mut self) {
        self.current.clear();
    }

    /// Reset every field to its initial empty value (the `C` key).
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Evaluate the pending operation against the two operands.
    ///
    /// Returns [`ComputeOutcome::NotReady`] without touching anything when
    /// there is no pending operation or either operand fails to parse. A
    /// division by zero is a typed error with all operands preserved and no
    /// record appended. On success the result is rounded to 8 decimal
    /// places, a record lands in the ledger, the rounded result becomes the
    /// current operand, and the pending slots empty out.
    pub fn compute(&mut self, ledger: &mut HistoryLedger) -> Result<ComputeOutcome, ComputeError> {
        let Some(op) = self.operation else {
            return Ok(ComputeOutcome::NotReady);
        };
        let Ok(lhs) = parse_operand(&self.pending) else {
            return Ok(ComputeOutcome::NotReady);
        };
        let Ok(rhs) = self.current.parse() else {
            return Ok(ComputeOutcome::NotReady);
        };

        let result = round_result(op.apply(lhs, rhs)?);

        ledger.append(&self.pending, op, self.current.as_str(), result);
        self.current.replace(result.to_string());
        self.pending.clear();
        self.operation = None;
        self.just_computed = true;
        Ok(ComputeOutcome::Evaluated(result))
    }

    /// The pending (left) operand text.
    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    /// The current operand text.
    pub fn current_text(&self) -> &str {
        self.current.as_str()
    }

    /// The pending operation, if one has been chosen.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Whether the last action was a successful compute.
    pub fn just_computed(&self) -> bool {
        self.just_computed
    }

    /// Derive the machine's informal phase from its fields.
    pub fn phase(&self) -> Phase {
        if self.operation.is_some() {
            if self.current.is_empty() {
                Phase::OperatorChosen
            } else {
                Phase::EnteringSecond
            }
        } else if self.just_computed {
            Phase::Computed
        } else if self.current.is_empty() {
            Phase::Empty
        } else {
            Phase::EnteringFirst
        }
    }
}
