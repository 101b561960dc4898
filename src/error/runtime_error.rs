use crate::operator::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Attempted integer division with a zero divisor.
    DivisionByZero,
    /// Arithmetic on the left and right operands left the `i64` range.
    Overflow {
        /// The operator that overflowed.
        op:    BinaryOperator,
        /// The left operand.
        left:  i64,
        /// The right operand.
        right: i64,
    },
    /// Negating the operand left the `i64` range.
    NegationOverflow {
        /// The operand that could not be negated.
        value: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow { op, left, right } => write!(f,
                                                         "Integer overflow while trying to compute {left} {op} {right}"),
            Self::NegationOverflow { value } => {
                write!(f, "Integer overflow while trying to negate {value}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
