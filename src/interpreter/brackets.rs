/// Returns `true` if every `)` closes an earlier `(` and none stay open.
///
/// Characters other than parentheses are ignored, so the empty string is
/// balanced.
///
/// # Example
/// ```
/// use rpncalc::interpreter::brackets::brackets_balanced;
///
/// assert!(brackets_balanced("((2 3 +))"));
/// assert!(brackets_balanced(""));
/// assert!(!brackets_balanced(")("));
/// assert!(!brackets_balanced("(2 3 +"));
/// ```
#[must_use]
pub fn brackets_balanced(expr: &str) -> bool {
    let mut depth = 0_usize;

    for c in expr.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {},
        }
    }

    depth == 0
}

/// Returns `true` if `expr` contains any parenthesis character.
#[must_use]
pub fn has_brackets(expr: &str) -> bool {
    expr.contains(['(', ')'])
}

/// Replaces every parenthesis with a space and trims the result.
///
/// Returns `None` if the brackets are not balanced. Brackets become spaces
/// rather than disappearing so that `(2 3 +)4` still splits into separate
/// words.
///
/// # Example
/// ```
/// use rpncalc::interpreter::brackets::strip_brackets;
///
/// assert_eq!(strip_brackets("( 2 3 + )").as_deref(), Some("2 3 +"));
/// assert_eq!(strip_brackets("(1 + (2 * 3))").as_deref(), Some("1 +  2 * 3"));
/// assert_eq!(strip_brackets("(2 3 +"), None);
/// ```
#[must_use]
pub fn strip_brackets(expr: &str) -> Option<String> {
    if !brackets_balanced(expr) {
        return None;
    }

    let flat: String = expr.chars()
                           .map(|c| if matches!(c, '(' | ')') { ' ' } else { c })
                           .collect();
    Some(flat.trim().to_string())
}
