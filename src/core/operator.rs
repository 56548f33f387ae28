//! The four binary operators and their arithmetic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while evaluating a pending operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComputeError {
    /// Division with a zero right-hand operand. The calculator commits no
    /// state change on this path; the message is shown to the user.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// A binary operator the calculator can hold as pending.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::Operator;
///
/// assert_eq!(Operator::Mul.symbol(), '×');
/// assert_eq!(Operator::from_symbol('÷'), Some(Operator::Div));
/// assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The display symbol, as shown on the keypad and in expressions.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    /// Map a keypad symbol back to its operator.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '×' => Some(Self::Mul),
            '÷' => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operator to `(lhs, rhs)` in that order.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, ComputeError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    Err(ComputeError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn from_symbol_rejects_unknown_characters() {
        assert_eq!(Operator::from_symbol('*'), None);
        assert_eq!(Operator::from_symbol('/'), None);
        assert_eq!(Operator::from_symbol('='), None);
    }

    #[test]
    fn apply_evaluates_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Sub.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Div.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            Operator::Div.apply(5.0, 0.0),
            Err(ComputeError::DivisionByZero)
        );
    }

    #[test]
    fn zero_numerator_divides_cleanly() {
        assert_eq!(Operator::Div.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn operator_serializes_correctly() {
        let json = serde_json::to_string(&Operator::Mul).unwrap();
        let deserialized: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Operator::Mul);
    }
}
