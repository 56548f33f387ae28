//! Append-only ledger of completed computations.
//!
//! Every successful compute appends one record. Records are immutable once
//! appended and are never removed individually; the only destructive
//! operation is a bulk clear.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Record of a single completed computation.
///
/// The expression keeps the operands exactly as they were entered, joined
/// with the operator symbol and a trailing `=`.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{HistoryLedger, Operator};
///
/// let mut ledger = HistoryLedger::new();
/// ledger.append("0.1", Operator::Add, "0.2", 0.3);
///
/// let record = &ledger.records()[0];
/// assert_eq!(record.expression, "0.1 + 0.2 =");
/// assert_eq!(record.result, 0.3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The rendered expression, e.g. `"5 × 3 ="`.
    pub expression: String,
    /// The rounded numeric result.
    pub result: f64,
}

/// Ordered, append-only sequence of computation records.
///
/// The ledger exposes two named presentation orders: [`newest_first`] for
/// the on-screen history (most recent at the top) and [`oldest_first`] for
/// the printed receipt (entries in the order they happened). The asymmetry
/// is deliberate; see the module tests, which pin both orders independently.
///
/// [`newest_first`]: HistoryLedger::newest_first
/// [`oldest_first`]: HistoryLedger::oldest_first
///
/// # Example
///
/// ```rust
/// use shopcalc::core::{HistoryLedger, Operator};
///
/// let mut ledger = HistoryLedger::new();
/// ledger.append("1", Operator::Add, "2", 3.0);
/// ledger.append("3", Operator::Mul, "4", 12.0);
///
/// let on_screen: Vec<_> = ledger.newest_first().map(|r| r.result).collect();
/// assert_eq!(on_screen, vec![12.0, 3.0]);
///
/// let printed: Vec<_> = ledger.oldest_first().map(|r| r.result).collect();
/// assert_eq!(printed, vec![3.0, 12.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
}

impl HistoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a completed computation.
    ///
    /// Builds the expression string from the operands as entered and stores
    /// the record at the end of the sequence. No deduplication and no
    /// capacity limit.
    pub fn append(&mut self, left: &str, op: Operator, right: &str, result: f64) {
        self.records.push(HistoryRecord {
            expression: format!("{left} {} {right} =", op.symbol()),
            result,
        });
    }

    /// Remove every record.
    ///
    /// Destructive; callers are expected to have confirmed with the user
    /// first (confirmation is a UI concern, not the ledger's).
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Records in reverse insertion order, most recent first.
    ///
    /// This is the on-screen display order.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().rev()
    }

    /// Records in natural insertion order, oldest first.
    ///
    /// This is the print order: a receipt lists entries as they happened.
    pub fn oldest_first(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r1_r2_ledger() -> HistoryLedger {
        let mut ledger = HistoryLedger::new();
        ledger.append("1", Operator::Add, "2", 3.0);
        ledger.append("10", Operator::Sub, "4", 6.0);
        ledger
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn append_builds_the_expression() {
        let mut ledger = HistoryLedger::new();
        ledger.append("5", Operator::Div, "2", 2.5);

        assert_eq!(ledger.len(), 1);
        let record = &ledger.records()[0];
        assert_eq!(record.expression, "5 ÷ 2 =");
        assert_eq!(record.result, 2.5);
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut ledger = HistoryLedger::new();
        ledger.append("2", Operator::Mul, "2", 4.0);
        ledger.append("2", Operator::Mul, "2", 4.0);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0], ledger.records()[1]);
    }

    #[test]
    fn newest_first_reverses_insertion_order() {
        let ledger = r1_r2_ledger();
        let expressions: Vec<_> = ledger.newest_first().map(|r| r.expression.as_str()).collect();
        assert_eq!(expressions, vec!["10 - 4 =", "1 + 2 ="]);
    }

    #[test]
    fn oldest_first_keeps_insertion_order() {
        let ledger = r1_r2_ledger();
        let expressions: Vec<_> = ledger.oldest_first().map(|r| r.expression.as_str()).collect();
        assert_eq!(expressions, vec!["1 + 2 =", "10 - 4 ="]);
    }

    #[test]
    fn clear_removes_every_record() {
        let mut ledger = r1_r2_ledger();
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.newest_first().count(), 0);
    }

    #[test]
    fn ledger_serializes_correctly() {
        let ledger = r1_r2_ledger();
        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: HistoryLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, deserialized);
    }
}
