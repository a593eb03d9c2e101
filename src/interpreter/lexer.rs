use logos::{Lexer, Logos};

use crate::operator::{BinaryOperator, Operator, UnaryOperator};

/// Represents a classified token of an RPN expression.
///
/// Expressions are split on whitespace first; every word is then classified
/// on its own. A word that the lexer cannot cover with exactly one token is
/// invalid.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-3.5`, `.5` or `2.1e-10`.
    /// Literals that overflow to an infinite value are rejected.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Operator symbols, resolved to their [`Operator`] here so the evaluator
    /// never compares strings.
    #[token("+", |_| Operator::Binary(BinaryOperator::Add))]
    #[token("-", |_| Operator::Binary(BinaryOperator::Sub))]
    #[token("*", |_| Operator::Binary(BinaryOperator::Mul))]
    #[token("/", |_| Operator::Binary(BinaryOperator::Div))]
    #[token("**", |_| Operator::Binary(BinaryOperator::Pow))]
    #[token("//", |_| Operator::Binary(BinaryOperator::IntDiv))]
    #[token("%", |_| Operator::Binary(BinaryOperator::Mod))]
    #[token("$", |_| Operator::Unary(UnaryOperator::Identity))]
    #[token("~", |_| Operator::Unary(UnaryOperator::Negate))]
    Operator(Operator),
}

fn parse_number(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
}

/// Classifies a single whitespace-free word.
///
/// Returns `None` unless the whole word is exactly one token, so `2+` or
/// `1.2.3` are rejected rather than split.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::lexer::{Token, classify},
///     operator::{BinaryOperator, Operator},
/// };
///
/// assert_eq!(classify("-2.5"), Some(Token::Number(-2.5)));
/// assert_eq!(classify("**"), Some(Token::Operator(Operator::Binary(BinaryOperator::Pow))));
/// assert_eq!(classify("2+"), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?.ok()?;
    (lexer.span().end == word.len()).then_some(token)
}

/// Returns `true` if `word` is a finite decimal number.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::is_numeric_token;
///
/// assert!(is_numeric_token("12.34"));
/// assert!(is_numeric_token("-56"));
/// assert!(!is_numeric_token("12.34.56"));
/// assert!(!is_numeric_token(""));
/// ```
#[must_use]
pub fn is_numeric_token(word: &str) -> bool {
    matches!(classify(word), Some(Token::Number(_)))
}
