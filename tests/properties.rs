use proptest::prelude::*;
use rpncalc::{
    error::{ErrorKind, EvalError},
    interpreter::{
        brackets::{brackets_balanced, strip_brackets},
        evaluator::core::Evaluator,
    },
};

fn eval(words: &[String]) -> Result<f64, EvalError> {
    Evaluator::evaluate(words.iter().map(String::as_str))
}

/// Finite operands that survive a `{:?}` round trip through the lexer.
fn operand() -> impl Strategy<Value = f64> {
    prop_oneof![(-1_000_000_i64..1_000_000).prop_map(|n| n as f64),
                (-1.0e6..1.0e6_f64)]
}

/// Strings built from brackets and bracket-free filler.
fn bracket_soup() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just("("), Just(")"), Just("1"), Just(" "), Just("+")],
                              0..24).prop_map(|parts| parts.concat())
}

fn wrap(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "(".repeat(depth), ")".repeat(depth))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn nested_brackets_are_balanced(depth in 0_usize..8, inner in "[0-9 +*-]{0,12}") {
        prop_assert!(brackets_balanced(&wrap(depth, &inner)));
    }

    #[test]
    fn unclosed_or_unopened_brackets_are_rejected(depth in 1_usize..8, inner in "[0-9 +]{0,12}") {
        let open = format!("({}", wrap(depth - 1, &inner));
        let close = format!("{})", wrap(depth - 1, &inner));
        prop_assert!(!brackets_balanced(&open));
        prop_assert!(!brackets_balanced(&close));
        prop_assert!(strip_brackets(&open).is_none());
    }

    #[test]
    fn balance_matches_depth_counting(expr in bracket_soup()) {
        let mut depth = 0_i64;
        let mut ok = true;
        for c in expr.chars() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth < 0 {
                        ok = false;
                        break;
                    }
                },
                _ => {},
            }
        }
        prop_assert_eq!(brackets_balanced(&expr), ok && depth == 0);
    }

    #[test]
    fn stripping_bracket_free_input_keeps_words(expr in "[0-9a-z +*/-]{0,24}") {
        let stripped = strip_brackets(&expr).expect("no brackets means balanced");
        let before: Vec<&str> = expr.split_whitespace().collect();
        let after: Vec<&str> = stripped.split_whitespace().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn division_and_subtraction_keep_operand_order(a in operand(), b in operand()) {
        prop_assume!(b != 0.0);
        let (sa, sb) = (format!("{a:?}"), format!("{b:?}"));

        prop_assert_eq!(eval(&[sa.clone(), sb.clone(), "/".into()]), Ok(a / b));
        prop_assert_eq!(eval(&[sa, sb, "-".into()]), Ok(a - b));
    }

    #[test]
    fn zero_divisor_always_fails(a in operand()) {
        let err = eval(&[format!("{a:?}"), "0".into(), "/".into()]).expect_err("division by zero");
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn double_negation_is_identity(a in operand()) {
        prop_assert_eq!(eval(&[format!("{a:?}"), "~".into(), "~".into()]), Ok(a));
    }

    #[test]
    fn integer_division_matches_truncating_i64(a in -10_000_i64..10_000, b in -100_i64..100) {
        prop_assume!(b != 0);
        let (sa, sb) = (a.to_string(), b.to_string());
        let q = eval(&[sa.clone(), sb.clone(), "//".into()]).expect("integral operands");
        let r = eval(&[sa, sb, "%".into()]).expect("integral operands");

        prop_assert_eq!(q, (a / b) as f64);
        prop_assert_eq!(r, ((a % b + b) % b) as f64);
    }
}
