/// Evaluation errors.
///
/// Defines every way a single line can fail: malformed brackets or tokens,
/// division by zero, integer-only operators given fractional operands, and
/// stack arity mismatches. Each error renders as the user-facing message.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
