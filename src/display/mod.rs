//! Display formatting for operands.
//!
//! The integer part is grouped in threes with commas; the fractional part,
//! when present, is appended verbatim with no grouping and no rounding.

use crate::core::Operator;

/// Format operand text for the display.
///
/// Splits on the first decimal point. The integer part is parsed and
/// grouped with thousands separators (leading zeros collapse, an empty or
/// unparsable integer part renders as the empty string); the fractional
/// digits are kept exactly as entered.
///
/// # Example
///
/// ```rust
/// use shopcalc::display;
///
/// assert_eq!(display::operand("1234567"), "1,234,567");
/// assert_eq!(display::operand("1000.0001"), "1,000.0001");
/// assert_eq!(display::operand(".5"), ".5");
/// assert_eq!(display::operand(""), "");
/// ```
pub fn operand(text: &str) -> String {
    let (int_part, frac) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };

    let grouped = match int_part.parse::<i64>() {
        Ok(value) => group_thousands(value, int_part.starts_with('-')),
        Err(_) => String::new(),
    };

    match frac {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// The upper display row while an operation is pending:
/// the formatted pending operand followed by the operator symbol.
pub fn pending_line(pending: &str, op: Operator) -> String {
    format!("{} {}", operand(pending), op.symbol())
}

fn group_thousands(value: i64, negative: bool) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
