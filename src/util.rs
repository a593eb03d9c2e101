/// Numeric helpers.
///
/// Integrality testing, truncating integer division, floored remainder over `f64`
/// operands, and result formatting. Every operand is stored as `f64`; these
/// helpers decide integer semantics from the value alone.
pub mod num;
