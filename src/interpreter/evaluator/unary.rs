use log::debug;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
    },
    operator::BinaryOperator,
};

impl Evaluator<'_, '_> {
    /// Parses and evaluates a factor.
    ///
    /// Supports:
    /// - `-` (negation). It recurses into `factor`, so `-x * 2` is `(-x) * 2`
    ///   and `- -x` negates twice. `--x` is a single pre-decrement token.
    /// - integer literals.
    /// - `++name` / `--name`, which store the new value and yield it.
    /// - `name++` / `name--`, which yield the current value and store the new
    ///   one.
    /// - `name`, which yields the stored value or `0`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "-" factor
    ///             | NUMBER
    ///             | ("++" | "--") IDENTIFIER
    ///             | IDENTIFIER ("++" | "--")?
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` naming the current token if it cannot start a
    /// factor, `LiteralTooLarge` for literals outside the `i64` range, and
    /// `NegationOverflow` or `Overflow` when the result leaves the range.
    pub(super) fn parse_factor(&mut self) -> EvalResult<i64> {
        match self.scanner.peek().kind() {
            TokenKind::Minus => {
                self.scanner.advance()?;
                let value = self.parse_factor()?;
                value.checked_neg()
                     .ok_or_else(|| RuntimeError::NegationOverflow { value }.into())
            },
            TokenKind::Number => {
                let token = self.scanner.advance()?;
                let literal = token.text();
                let value = literal.parse::<i64>().map_err(|_| {
                                                      ParseError::LiteralTooLarge { literal:
                                                                                        literal.to_string() }
                                                  })?;
                Ok(value)
            },
            TokenKind::PreInc => self.eval_prefix(BinaryOperator::Add),
            TokenKind::PreDec => self.eval_prefix(BinaryOperator::Sub),
            TokenKind::Identifier => self.eval_variable(),
            _ => Err(self.unexpected_token()),
        }
    }

    /// Evaluates `++name` or `--name`, with the scanner positioned on the
    /// prefix operator.
    ///
    /// The variable is updated before its value is used, so the factor yields
    /// the new value.
    fn eval_prefix(&mut self, op: BinaryOperator) -> EvalResult<i64> {
        self.scanner.advance()?;

        if self.scanner.peek().kind() != TokenKind::Identifier {
            return Err(self.unexpected_token());
        }
        let token = self.scanner.advance()?;
        let name = token.text();

        let value = Self::apply(op, self.variables.get(name), 1)?;
        self.variables.set(name, value);
        debug!("prefix {op}{op} stored {name} = {value}");

        Ok(value)
    }

    /// Evaluates a variable read, with the scanner positioned on the
    /// identifier, along with a postfix `++` or `--` if one follows.
    ///
    /// A postfix operator stores the new value but the factor yields the
    /// value from before the update.
    fn eval_variable(&mut self) -> EvalResult<i64> {
        let token = self.scanner.advance()?;
        let name = token.text();
        let current = self.variables.get(name);

        let op = match self.scanner.peek().kind() {
            TokenKind::PostInc => BinaryOperator::Add,
            TokenKind::PostDec => BinaryOperator::Sub,
            _ => return Ok(current),
        };
        self.scanner.advance()?;

        let updated = Self::apply(op, current, 1)?;
        self.variables.set(name, updated);
        debug!("postfix {op}{op} stored {name} = {updated}");

        Ok(current)
    }

    fn unexpected_token(&self) -> Error {
        ParseError::UnexpectedToken { token: self.scanner.peek().text().to_string() }.into()
    }
}
