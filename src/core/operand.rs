//! Bounded text buffer for the operand being keyed in.
//!
//! Operands are kept as text while digits are entered and only parsed when a
//! computation needs their numeric value. Parse failure is an explicit error
//! type, never a NaN sentinel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters that can be keyed into an operand.
pub const MAX_OPERAND_LEN: usize = 8;

/// Errors produced when parsing an operand's text as a number.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OperandError {
    /// The operand has no characters at all.
    #[error("operand is empty")]
    Empty,

    /// The operand text is not a valid numeric literal.
    #[error("operand '{text}' is not a number")]
    Unparsable { text: String },
}

/// Parse operand text as a number.
///
/// Used both for the live entry buffer and for the stored left-hand operand,
/// which is plain text after it has been moved out of the buffer.
pub fn parse_operand(text: &str) -> Result<f64, OperandError> {
    if text.is_empty() {
        return Err(OperandError::Empty);
    }
    text.parse::<f64>().map_err(|_| OperandError::Unparsable {
        text: text.to_string(),
    })
}

/// Text buffer for the operand currently being entered.
///
/// The buffer enforces two invariants at the point of entry: it holds at most
/// [`MAX_OPERAND_LEN`] characters, and at most one decimal point. A push that
/// would violate either is silently rejected.
///
/// # Example
///
/// ```rust
/// use shopcalc::core::OperandBuffer;
///
/// let mut buffer = OperandBuffer::new();
/// assert!(buffer.push('4'));
/// assert!(buffer.push('2'));
/// assert!(buffer.push('.'));
/// assert!(!buffer.push('.')); // second decimal point rejected
/// assert!(buffer.push('5'));
///
/// assert_eq!(buffer.as_str(), "42.5");
/// assert_eq!(buffer.parse(), Ok(42.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperandBuffer {
    text: String,
}

impl OperandBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Whether the buffer would accept this character right now.
    ///
    /// True for the digits `0`-`9` and a first `.`, while the buffer is
    /// below its length cap.
    pub fn accepts(&self, c: char) -> bool {
        if !c.is_ascii_digit() && c != '.' {
            return false;
        }
        if self.text.chars().count() >= MAX_OPERAND_LEN {
            return false;
        }
        !(c == '.' && self.text.contains('.'))
    }

    /// Append one character, returning whether it was accepted.
    ///
    /// Rejections are silent no-ops: a full buffer, a duplicate decimal
    /// point, or any other character leave the buffer unchanged.
    pub fn push(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the buffer contents wholesale.
    ///
    /// Used when a computed result becomes the current operand. Results are
    /// exempt from the entry length cap, which applies to keyed input only.
    pub(crate) fn replace(&mut self, text: String) {
        self.text = text;
    }

    /// Move the text out, leaving the buffer empty.
    pub(crate) fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters currently held.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// The raw operand text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parse the buffer as a number.
    pub fn parse(&self) -> Result<f64, OperandError> {
        parse_operand(&self.text)
    }
}
