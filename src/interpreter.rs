/// The evaluator module runs RPN word sequences on a stack machine.
///
/// Numbers are pushed, operators pop their operands and push the result,
/// and the expression must finish with exactly one value.
///
/// # Responsibilities
/// - Applies unary and binary operators with their domain checks.
/// - Reports division by zero, non-integral operands and arity errors.
pub mod evaluator;
/// The lexer module classifies whitespace-separated words.
///
/// Each word becomes either a number or an [`crate::operator::Operator`];
/// anything else is invalid.
pub mod lexer;
/// Bracket validation and stripping.
///
/// Parentheses only group visually; they are checked for balance and then
/// replaced by whitespace before evaluation.
pub mod brackets;
/// Per-line orchestration.
///
/// Ties brackets, word splitting and evaluation together and maps the result
/// to the printed [`line::Outcome`].
pub mod line;
