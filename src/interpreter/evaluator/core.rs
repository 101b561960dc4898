use crate::{
    error::Error,
    interpreter::{
        lexer::{Scanner, TokenKind},
        store::VariableStore,
    },
    operator::BinaryOperator,
};

/// Result type used by the evaluator.
///
/// Scanning happens while evaluating, so failures are either a
/// [`ParseError`](crate::error::ParseError) or a
/// [`RuntimeError`](crate::error::RuntimeError), wrapped in [`Error`].
pub type EvalResult<T> = Result<T, Error>;

/// Recursive descent evaluator for integer expressions.
///
/// There is no syntax tree: every grammar rule computes its value as soon as
/// it is recognized. Increment and decrement operators write to the borrowed
/// [`VariableStore`] at the moment they are evaluated, so later factors of the
/// same expression see the new values and an error part way through keeps
/// the writes that already happened.
///
/// Grammar, lowest precedence first:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := "-" factor
///                 | NUMBER
///                 | "++" IDENTIFIER
///                 | "--" IDENTIFIER
///                 | IDENTIFIER ("++" | "--")?
/// ```
pub struct Evaluator<'src, 'vars> {
    pub(super) scanner:   Scanner<'src>,
    pub(super) variables: &'vars mut VariableStore,
}

impl<'src, 'vars> Evaluator<'src, 'vars> {
    /// Creates an evaluator reading tokens from `scanner` and variables from
    /// `variables`.
    pub const fn new(scanner: Scanner<'src>, variables: &'vars mut VariableStore) -> Self {
        Self { scanner, variables }
    }

    /// Scans `source` and evaluates it as an expression.
    ///
    /// # Errors
    /// Returns the first scanning, parsing or arithmetic error met. Input
    /// after the end of the expression is ignored, except for the one token
    /// of lookahead that has to be scanned to find that end.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::{evaluator::core::Evaluator, store::VariableStore};
    ///
    /// let mut variables = VariableStore::new();
    /// variables.set("i", 1);
    ///
    /// let value = Evaluator::evaluate_source("++i + i++", &mut variables).unwrap();
    /// assert_eq!(value, 4);
    /// assert_eq!(variables.get("i"), 3);
    /// ```
    pub fn evaluate_source(source: &'src str,
                           variables: &'vars mut VariableStore)
                           -> EvalResult<i64> {
        let scanner = Scanner::new(source)?;
        Self::new(scanner, variables).parse_expression()
    }

    /// Parses and evaluates an expression starting at the current token.
    ///
    /// Addition and subtraction fold left to right over terms.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// The value of the expression.
    pub fn parse_expression(&mut self) -> EvalResult<i64> {
        let mut value = self.parse_term()?;
        loop {
            let op = match self.scanner.peek().kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.scanner.advance()?;
            let rhs = self.parse_term()?;
            value = Self::apply(op, value, rhs)?;
        }
        Ok(value)
    }
}
