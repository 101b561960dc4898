use log::{debug, info};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::is_valid_identifier,
        store::VariableStore,
    },
    operator::AssignmentOperator,
};

/// Evaluates assignment statements against a persistent variable store.
///
/// A statement is one line of the form `name <op> expression` where `<op>`
/// is `=`, `+=` or `-=`. The store lives as long as the calculator and keeps
/// every mutation, including increment and decrement side effects of
/// statements that later failed.
#[derive(Debug, Default)]
pub struct Calculator {
    variables: VariableStore,
}

impl Calculator {
    /// Creates a calculator with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variables assigned so far, in first-assignment order.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Evaluates one statement and commits its result.
    ///
    /// Blank lines are ignored. The assignment operator is found by substring
    /// search, compound operators first, and the line is split textually on
    /// it; a right-hand side that contains the operator again is therefore
    /// rejected or misread rather than parsed.
    ///
    /// # Parameters
    /// - `line`: The statement, such as `x = i++ + 5`.
    ///
    /// # Errors
    /// - `Syntax` if the line has no assignment operator or does not split into
    ///   a target and an expression.
    /// - `InvalidVariableName` if the target is not a valid identifier.
    /// - Any error raised while evaluating the expression.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::statement::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.evaluate("i = 0").unwrap();
    /// calculator.evaluate("x = i++ + 5").unwrap();
    /// calculator.evaluate("x += 1").unwrap();
    ///
    /// assert_eq!(calculator.variables().get("i"), 1);
    /// assert_eq!(calculator.variables().get("x"), 6);
    /// assert_eq!(calculator.variables().to_string(), "(i=1,x=6)");
    /// ```
    pub fn evaluate(&mut self, line: &str) -> EvalResult<()> {
        let line = line.trim();
        if line.is_empty() {
            debug!("skipping empty line");
            return Ok(());
        }
        debug!("evaluating line: {line}");

        let (name, op, expression) = split_statement(line)?;

        let value = Evaluator::evaluate_source(expression, &mut self.variables)?;
        let value = match op.arithmetic() {
            None => value,
            Some(arithmetic) => Evaluator::apply(arithmetic, self.variables.get(name), value)?,
        };

        self.variables.set(name, value);
        info!("assigned {name} = {value}");

        Ok(())
    }
}

/// Splits a statement into its target, operator and expression.
///
/// The line is cut at every occurrence of the operator and trailing empty
/// pieces are dropped; exactly two pieces must remain.
fn split_statement(line: &str) -> Result<(&str, AssignmentOperator, &str), ParseError> {
    let op = AssignmentOperator::detect(line).ok_or_else(|| ParseError::Syntax {
        details: format!("Line must contain '=', '+=', or '-=' operator: {line}"),
    })?;

    let mut parts: Vec<&str> = line.split(op.symbol()).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    let [name, expression] = parts.as_slice() else {
        return Err(ParseError::Syntax { details: format!("Invalid assignment expression: {line}") });
    };

    let name = name.trim();
    if !is_valid_identifier(name) {
        return Err(ParseError::InvalidVariableName { name: name.to_string() });
    }

    Ok((name, op, expression.trim()))
}
