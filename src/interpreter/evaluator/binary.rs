use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
    },
    operator::BinaryOperator,
};

impl Evaluator<'_, '_> {
    /// Parses multiplication-level expressions.
    ///
    /// Multiplication and division fold left to right over factors, so
    /// `20 / 4 * 2` is `10`.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub(super) fn parse_term(&mut self) -> EvalResult<i64> {
        let mut value = self.parse_factor()?;
        loop {
            let op = match self.scanner.peek().kind() {
                TokenKind::Mul => BinaryOperator::Mul,
                TokenKind::Div => BinaryOperator::Div,
                _ => break,
            };
            self.scanner.advance()?;
            let rhs = self.parse_factor()?;
            value = Self::apply(op, value, rhs)?;
        }
        Ok(value)
    }

    /// Applies a binary arithmetic operator to two integers.
    ///
    /// Division truncates toward zero. A zero divisor is rejected before any
    /// arithmetic happens, and results outside the `i64` range are reported
    /// instead of wrapping.
    ///
    /// # Example
    /// ```
    /// use varcalc::{
    ///     error::{Error, RuntimeError},
    ///     interpreter::evaluator::core::Evaluator,
    ///     operator::BinaryOperator,
    /// };
    ///
    /// assert_eq!(Evaluator::apply(BinaryOperator::Div, -7, 2).unwrap(), -3);
    ///
    /// let err = Evaluator::apply(BinaryOperator::Div, 5, 0).unwrap_err();
    /// assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
    /// assert_eq!(err.to_string(), "Division by zero");
    /// ```
    pub fn apply(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        if op == BinaryOperator::Div && right == 0 {
            return Err(RuntimeError::DivisionByZero.into());
        }

        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => left.checked_div(right),
        };

        result.ok_or_else(|| RuntimeError::Overflow { op, left, right }.into())
    }
}
