/// The evaluator module parses and computes expressions in one pass.
///
/// The evaluator is a recursive descent parser that computes values as it
/// recognizes them instead of building a tree. It reads tokens from the
/// scanner, applies integer arithmetic with operator precedence, and performs
/// increment and decrement side effects on the variable store.
///
/// # Responsibilities
/// - Evaluates expressions with `+`, `-`, `*`, `/` and unary minus.
/// - Applies pre/post increment and decrement exactly when they are met.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes expressions for the evaluator.
///
/// The scanner reads the raw text and exposes one current token at a time:
/// numbers, identifiers, arithmetic operators, and the prefix and postfix
/// forms of `++` and `--`.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Tells `++i` from `i++` while scanning, without backtracking.
/// - Reports lexical errors for invalid characters and malformed names.
pub mod lexer;
/// The statement module evaluates assignment lines.
///
/// It splits a line into a target variable, an assignment operator and an
/// expression, evaluates the expression, and commits the result.
pub mod statement;
/// The store module holds the variables of a session.
pub mod store;
