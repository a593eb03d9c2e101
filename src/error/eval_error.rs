use thiserror::Error;

use crate::operator::BinaryOperator;

/// Broad category of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: unbalanced brackets or an unrecognized token.
    Syntax,
    /// A `/`, `//` or `%` divisor was zero.
    DivisionByZero,
    /// An integer-only operator received a fractional operand.
    ValueDomain,
    /// The stack held too few operands, or not exactly one final value.
    Arity,
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating one line.
///
/// The `Display` text of each variant is the message printed after `ERROR: `.
/// All messages are fixed strings except `InvalidToken`, which also names the
/// offending word.
pub enum EvalError {
    /// Parentheses are unmatched or left open.
    #[error("Invalid brackets")]
    InvalidBrackets,
    /// A word is neither a number nor a known operator.
    ///
    /// This is the only message that is not a fixed string.
    #[error("Invalid token: {token}")]
    InvalidToken {
        /// The offending word.
        token: String,
    },
    /// The right-hand operand of a division-like operator was zero.
    #[error("{}", division_by_zero_message(.op))]
    DivisionByZero {
        /// The operator that divided by zero.
        op: BinaryOperator,
    },
    /// `//` or `%` was applied to a non-integral operand.
    #[error("Operands for {op} must be integers")]
    NonIntegralOperands {
        /// The integer-only operator.
        op: BinaryOperator,
    },
    /// Stack underflow, or the expression did not reduce to a single value.
    #[error("expression is incorrect")]
    InvalidExpression,
}

impl EvalError {
    /// Returns the category this error belongs to.
    ///
    /// # Example
    /// ```
    /// use rpncalc::error::{ErrorKind, EvalError};
    ///
    /// assert_eq!(EvalError::InvalidBrackets.kind(), ErrorKind::Syntax);
    /// assert_eq!(EvalError::InvalidExpression.kind(), ErrorKind::Arity);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBrackets | Self::InvalidToken { .. } => ErrorKind::Syntax,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::NonIntegralOperands { .. } => ErrorKind::ValueDomain,
            Self::InvalidExpression => ErrorKind::Arity,
        }
    }
}

const fn division_by_zero_message(op: &BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::IntDiv => "Integer division by zero",
        BinaryOperator::Mod => "Modulo by zero",
        _ => "Division by zero",
    }
}
