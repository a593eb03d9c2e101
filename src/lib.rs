//! # rpncalc
//!
//! rpncalc is a line-oriented calculator for expressions in Reverse Polish
//! Notation. Each line is one independent expression; parentheses may wrap
//! it for readability and are validated and stripped before evaluation.
//! Every input line yields exactly one output line: the value, or
//! `ERROR: <message>`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use tracing::info;

pub use crate::interpreter::line::{Outcome, process_line};

/// Provides the error taxonomy for evaluation.
///
/// Every failure of a line is one `EvalError` variant whose `Display` is the
/// user-facing message. Each variant also maps to a broad `ErrorKind`
/// (syntax, division by zero, value domain, arity).
pub mod error;
/// Orchestrates evaluation of a single line.
///
/// This module ties together bracket handling, word classification and the
/// stack machine.
///
/// # Responsibilities
/// - Validates and strips parentheses.
/// - Classifies words into numbers and operators.
/// - Runs the RPN stack machine and maps its result to an output line.
pub mod interpreter;
/// The operator table.
///
/// Declares the closed set of unary and binary operators together with their
/// constant descriptors: symbol, arity and whether integral operands are
/// required.
pub mod operator;
/// Numeric helpers shared by the evaluator and output formatting.
pub mod util;

/// Counts gathered while processing a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of lines read.
    pub lines:  usize,
    /// Number of lines that produced an `ERROR:` outcome.
    pub errors: usize,
}

/// Evaluates every line of `input` and writes one outcome line per input line
/// to `output`.
///
/// Lines are decoded as UTF-8 lossily and the trailing `\n` or `\r\n` is
/// removed. Per-line failures are written as `ERROR: ...` and never stop the
/// loop; only I/O failures do.
///
/// # Errors
/// Returns any error raised while reading `input` or writing `output`.
///
/// # Examples
/// ```
/// use rpncalc::run;
///
/// let mut out = Vec::new();
/// let summary = run("2 3 +\n( 2 3 +\n".as_bytes(), &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5.0\nERROR: Invalid brackets\n");
/// assert_eq!(summary.lines, 2);
/// assert_eq!(summary.errors, 1);
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');

        let outcome = process_line(line);
        summary.lines += 1;
        if outcome.is_error() {
            summary.errors += 1;
        }
        writeln!(output, "{outcome}")?;
    }

    output.flush()?;
    info!(lines = summary.lines, errors = summary.errors, "input exhausted");
    Ok(summary)
}
