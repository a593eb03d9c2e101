use pretty_assertions::assert_eq;
use rpncalc::{
    error::{ErrorKind, EvalError},
    interpreter::{
        brackets::{brackets_balanced, strip_brackets},
        evaluator::core::Evaluator,
        lexer::{Token, classify, is_numeric_token},
    },
    operator::{BinaryOperator, Operator, UnaryOperator},
    util::num::is_integral,
};

fn eval(words: &[&str]) -> Result<f64, EvalError> {
    Evaluator::evaluate(words.iter().copied())
}

#[test]
fn integrality() {
    for (value, expected) in [(5.0, true), (5.5, false), (0.0, true), (-3.0, true), (-3.5, false)] {
        assert_eq!(is_integral(value), expected, "value: {value}");
    }
    assert!(!is_integral(f64::NAN));
    assert!(!is_integral(f64::NEG_INFINITY));
}

#[test]
fn numeric_tokens() {
    for word in ["123", "12.34", "-56", "-78.9", "0", "0.0", "+4", ".5", "5.", "1e3", "2.5E-2"] {
        assert!(is_numeric_token(word), "{word} should be numeric");
    }
    for word in ["abc", "12a", "", "12.34.56", "-", "1e999", "nan", "inf", "1_000"] {
        assert!(!is_numeric_token(word), "{word} should not be numeric");
    }
}

#[test]
fn operator_classification() {
    for op in Operator::ALL {
        assert_eq!(classify(op.descriptor().symbol), Some(Token::Operator(op)));
    }
    assert_eq!(classify("$"), Some(Token::Operator(Operator::Unary(UnaryOperator::Identity))));
    assert_eq!(classify("+"), Some(Token::Operator(Operator::Binary(BinaryOperator::Add))));
    assert_eq!(classify("***"), None);
    assert_eq!(classify("abc"), None);
}

#[test]
fn operator_descriptors() {
    let binary = Operator::ALL.iter().filter(|op| op.descriptor().arity == 2).count();
    let unary = Operator::ALL.iter().filter(|op| op.descriptor().arity == 1).count();
    assert_eq!((binary, unary), (7, 2));

    let integral: Vec<&str> = Operator::ALL.iter()
                                           .filter(|op| op.descriptor().integral_operands)
                                           .map(|op| op.descriptor().symbol)
                                           .collect();
    assert_eq!(integral, vec!["//", "%"]);

    assert_eq!(Operator::from_symbol("~"), Some(Operator::Unary(UnaryOperator::Negate)));
    assert_eq!(Operator::from_symbol("abc"), None);
}

#[test]
fn binary_operations() {
    assert_eq!(eval(&["2", "3", "+"]), Ok(5.0));
    assert_eq!(eval(&["5", "2", "-"]), Ok(3.0));
    assert_eq!(eval(&["3", "4", "*"]), Ok(12.0));
    assert_eq!(eval(&["10", "2", "/"]), Ok(5.0));
    assert_eq!(eval(&["2", "3", "**"]), Ok(8.0));
    assert_eq!(eval(&["5", "2", "//"]), Ok(2.0));
    assert_eq!(eval(&["7", "3", "%"]), Ok(1.0));
}

#[test]
fn error_kinds() {
    let cases = [(vec!["5", "0", "/"], ErrorKind::DivisionByZero),
                 (vec!["5", "0", "//"], ErrorKind::DivisionByZero),
                 (vec!["5", "0", "%"], ErrorKind::DivisionByZero),
                 (vec!["5.5", "2", "//"], ErrorKind::ValueDomain),
                 (vec!["5", "2.5", "%"], ErrorKind::ValueDomain),
                 (vec!["2", "3", "+", "5"], ErrorKind::Arity),
                 (vec![], ErrorKind::Arity),
                 (vec!["1", "x"], ErrorKind::Syntax)];

    for (words, kind) in cases {
        let err = eval(&words).expect_err("expression should fail");
        assert_eq!(err.kind(), kind, "words: {words:?}");
    }
}

#[test]
fn division_by_zero_names_the_operator() {
    assert_eq!(eval(&["5.5", "0", "//"]),
               Err(EvalError::DivisionByZero { op: BinaryOperator::IntDiv }));
    assert_eq!(eval(&["1", "0", "%"]),
               Err(EvalError::DivisionByZero { op: BinaryOperator::Mod }));
}

#[test]
fn first_failure_wins() {
    assert_eq!(eval(&["+", "foo"]), Err(EvalError::InvalidExpression));
    assert_eq!(eval(&["foo", "+"]), Err(EvalError::InvalidToken { token: "foo".into() }));
}

#[test]
fn stepwise_evaluation() {
    let mut evaluator = Evaluator::new();
    evaluator.push_word("1").unwrap();
    evaluator.push_word("2").unwrap();
    assert_eq!(evaluator.depth(), 2);
    evaluator.push_word("+").unwrap();
    assert_eq!(evaluator.depth(), 1);
    assert_eq!(evaluator.finish(), Ok(3.0));
}

#[test]
fn bracket_balance() {
    for (expr, expected) in [("(a + b)", true),
                             ("((a + b) * c)", true),
                             ("(((a)))", true),
                             ("()", true),
                             ("", true),
                             (")(", false),
                             ("(a + b))", false),
                             ("((a + b)", false),
                             ("(a + (b * c)", false),
                             ("a + b)", false),
                             ("(a + b", false)]
    {
        assert_eq!(brackets_balanced(expr), expected, "expr: {expr:?}");
    }
}

#[test]
fn bracket_stripping() {
    for (expr, expected) in [("(a + b)", Some("a + b")),
                             ("((a + b))", Some("a + b")),
                             ("(a)", Some("a")),
                             ("()", Some("")),
                             ("(1 + (2 * 3))", Some("1 +  2 * 3")),
                             ("(a + b", None)]
    {
        assert_eq!(strip_brackets(expr).as_deref(), expected, "expr: {expr:?}");
    }
}
