//! # varcalc
//!
//! varcalc is a line-oriented integer calculator written in Rust.
//! Each line assigns the value of an expression to a named variable, with
//! support for compound assignment and pre/post increment and decrement
//! operators that update variables while an expression is evaluated.

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

use crate::interpreter::statement::Calculator;

/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while a line is
/// evaluated. Every error aborts the current statement only; callers report
/// it and carry on with the next line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Carries the offending text or operands for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Ties together scanning, expression evaluation, statements and the variable
/// store.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, evaluator, statement layer and
///   store.
/// - Provides the entry points for evaluating single lines.
pub mod interpreter;
/// Arithmetic and assignment operators.
pub mod operator;

/// Evaluates every line of a script and reports the final variables.
///
/// Blank lines are skipped. A failing line is reported as
/// `Error in line '<line>': <message>` and evaluation continues with the next
/// one. After the last line the variables are written once, as `(a=1,b=2)`.
///
/// # Errors
/// Returns an error only if writing to `output` fails.
///
/// # Examples
/// ```
/// use varcalc::run_batch;
///
/// let mut output = Vec::new();
/// let calculator = run_batch("a = 1\nb = a / 0\nb = a + 1", &mut output).unwrap();
///
/// assert_eq!(calculator.variables().get("b"), 2);
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "Error in line 'b = a / 0': Division by zero\n(a=1,b=2)\n");
/// ```
pub fn run_batch(source: &str, output: &mut impl Write) -> io::Result<Calculator> {
    let mut calculator = Calculator::new();

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = calculator.evaluate(line) {
            writeln!(output, "Error in line '{line}': {e}")?;
        }
    }

    writeln!(output, "{}", calculator.variables())?;
    Ok(calculator)
}

/// Runs a read-evaluate-print loop until `exit` or end of input.
///
/// Each line is evaluated as a statement. On success the variables are
/// printed on one line, on failure the error is printed as `Error: <message>`.
/// `exit` is matched case-insensitively.
///
/// # Errors
/// Returns an error if reading `input` or writing `output` fails.
///
/// # Examples
/// ```
/// use varcalc::run_interactive;
///
/// let input = "i = 5\nj = i--\nEXIT\nk = 1\n".as_bytes();
/// let mut output = Vec::new();
/// let calculator = run_interactive(input, &mut output).unwrap();
///
/// assert_eq!(calculator.variables().to_string(), "(i=4,j=5)");
/// assert!(String::from_utf8(output).unwrap().ends_with("> Exiting...\n"));
/// ```
pub fn run_interactive(mut input: impl BufRead, output: &mut impl Write) -> io::Result<Calculator> {
    let mut calculator = Calculator::new();

    writeln!(output, "Calculator Interactive Mode")?;
    writeln!(output, "Type expressions or 'exit' to quit.")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("exit") {
            writeln!(output, "Exiting...")?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match calculator.evaluate(&line) {
            Ok(()) => writeln!(output, "{}", calculator.variables())?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }

    Ok(calculator)
}
