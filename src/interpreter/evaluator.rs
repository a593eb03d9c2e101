/// Binary operator evaluation logic.
///
/// Implements the seven two-operand operators, including the zero-divisor and
/// integrality checks of `/`, `//` and `%`.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity (`$`) and negation (`~`).
pub mod unary;

/// Core evaluation logic.
///
/// Contains the stack machine, word dispatch and the final single-value
/// check.
pub mod core;
