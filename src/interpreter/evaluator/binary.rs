use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::BinaryOperator,
    util::num::{floored_rem, is_integral, truncated_div},
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// `left` is the operand pushed earlier, `right` the one on top of the
    /// stack. `/` rejects a zero divisor. `//` and `%` reject a zero divisor
    /// first and only then require both operands to be integral. `//`
    /// truncates toward zero while `%` is floored (the result takes the sign
    /// of the divisor), so `(a // b) * b + a % b == a` does not hold when the
    /// operands differ in sign. `**` accepts any exponent.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     error::EvalError, interpreter::evaluator::core::Evaluator, operator::BinaryOperator,
    /// };
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Sub, 5.0, 2.0), Ok(3.0));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Pow, 2.0, 3.0), Ok(8.0));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::IntDiv, -7.0, 2.0), Ok(-3.0));
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Mod, 5.5, 0.0),
    ///            Err(EvalError::DivisionByZero { op: BinaryOperator::Mod }));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, IntDiv, Mod, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Pow => Ok(left.powf(right)),
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { op });
                }
                Ok(left / right)
            },
            IntDiv | Mod => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { op });
                }
                if !is_integral(left) || !is_integral(right) {
                    return Err(EvalError::NonIntegralOperands { op });
                }
                Ok(if op == IntDiv {
                       truncated_div(left, right)
                   } else {
                       floored_rem(left, right)
                   })
            },
        }
    }
}
