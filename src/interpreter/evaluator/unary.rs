use crate::{interpreter::evaluator::core::Evaluator, operator::UnaryOperator};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Identity` (`$`): returns the operand unchanged.
    /// - `Negate` (`~`): arithmetic sign inversion.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{interpreter::evaluator::core::Evaluator, operator::UnaryOperator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Identity, 5.0), 5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Identity => value,
            UnaryOperator::Negate => -value,
        }
    }
}
