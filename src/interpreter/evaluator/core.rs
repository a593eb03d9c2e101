use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::lexer::{Token, classify},
    operator::Operator,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The RPN stack machine.
///
/// An `Evaluator` owns the operand stack for exactly one expression. Words are
/// consumed left to right: numbers are pushed, operators pop their operands
/// and push the result.
///
/// ## Usage
///
/// Most callers use [`Evaluator::evaluate`], which runs a whole word sequence
/// and checks that exactly one value is left.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    /// Creates an evaluator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a sequence of words and returns the single resulting value.
    ///
    /// # Errors
    /// - `InvalidToken` for a word that is neither a number nor an operator.
    /// - `InvalidExpression` if an operator lacks operands or the stack does
    ///   not end with exactly one value (this includes an empty sequence).
    /// - `DivisionByZero` and `NonIntegralOperands` from the operators.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{error::EvalError, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::evaluate(["5", "2", "-"]), Ok(3.0));
    /// assert_eq!(Evaluator::evaluate(["2", "3", "~", "*", "5", "+"]), Ok(-1.0));
    /// assert_eq!(Evaluator::evaluate(["2", "3", "+", "5"]), Err(EvalError::InvalidExpression));
    /// ```
    pub fn evaluate<'a, I>(words: I) -> EvalResult<f64>
        where I: IntoIterator<Item = &'a str>
    {
        let mut evaluator = Self::new();
        for word in words {
            evaluator.push_word(word)?;
        }
        evaluator.finish()
    }

    /// Classifies one word and applies it to the stack.
    ///
    /// # Errors
    /// Returns `InvalidToken` for unrecognized words, or any error raised by
    /// the operator the word names.
    pub fn push_word(&mut self, word: &str) -> EvalResult<()> {
        match classify(word) {
            Some(token) => self.push_token(token),
            None => Err(EvalError::InvalidToken { token: word.to_string() }),
        }
    }

    /// Applies an already classified token to the stack.
    ///
    /// # Errors
    /// Returns `InvalidExpression` on stack underflow, or any domain error of
    /// the applied operator.
    pub fn push_token(&mut self, token: Token) -> EvalResult<()> {
        match token {
            Token::Number(value) => {
                trace!(value, "push");
                self.stack.push(value);
            },
            Token::Operator(Operator::Unary(op)) => {
                let operand = self.pop()?;
                let result = Self::eval_unary(op, operand);
                trace!(%op, operand, result, "apply unary");
                self.stack.push(result);
            },
            Token::Operator(Operator::Binary(op)) => {
                let right = self.pop()?;
                let left = self.pop()?;
                let result = Self::eval_binary(op, left, right)?;
                trace!(%op, left, right, result, "apply binary");
                self.stack.push(result);
            },
        }
        Ok(())
    }

    /// Consumes the evaluator and returns the final value.
    ///
    /// # Errors
    /// Returns `InvalidExpression` unless exactly one value is on the stack.
    pub fn finish(mut self) -> EvalResult<f64> {
        let result = self.pop()?;
        if self.stack.is_empty() {
            Ok(result)
        } else {
            Err(EvalError::InvalidExpression)
        }
    }

    /// Current depth of the operand stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn pop(&mut self) -> EvalResult<f64> {
        self.stack.pop().ok_or(EvalError::InvalidExpression)
    }
}
