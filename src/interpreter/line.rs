use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{
        brackets::{has_brackets, strip_brackets},
        evaluator::core::{EvalResult, Evaluator},
    },
    util::num::format_value,
};

/// The result of processing one input line.
///
/// Its `Display` form is exactly the output line: the value on success, or
/// `ERROR: <message>` on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The expression reduced to this value.
    Value(f64),
    /// The expression was rejected.
    Error(EvalError),
}

impl Outcome {
    /// Returns `true` for the `Error` variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<EvalResult<f64>> for Outcome {
    fn from(result: EvalResult<f64>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(e) => Self::Error(e),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{}", format_value(*value)),
            Self::Error(e) => write!(f, "ERROR: {e}"),
        }
    }
}

/// Evaluates one line: brackets are validated and flattened if present, the
/// remaining text is split on whitespace and run through the evaluator.
///
/// # Errors
/// Returns `InvalidBrackets` for unbalanced parentheses, otherwise whatever
/// the evaluator reports.
pub fn eval_line(line: &str) -> EvalResult<f64> {
    if has_brackets(line) {
        let flat = strip_brackets(line).ok_or(EvalError::InvalidBrackets)?;
        Evaluator::evaluate(flat.split_whitespace())
    } else {
        Evaluator::evaluate(line.split_whitespace())
    }
}

/// Processes one line into its [`Outcome`].
///
/// # Example
/// ```
/// use rpncalc::interpreter::line::process_line;
///
/// assert_eq!(process_line("( 2 3 + )").to_string(), "5.0");
/// assert_eq!(process_line("5 0 /").to_string(), "ERROR: Division by zero");
/// ```
#[must_use]
pub fn process_line(line: &str) -> Outcome {
    let outcome = Outcome::from(eval_line(line));
    debug!(line, %outcome, "processed line");
    outcome
}
