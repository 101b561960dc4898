/// Core evaluation logic for expressions.
///
/// Declares the [`Evaluator`](core::Evaluator), its result type and the
/// lowest precedence level (addition and subtraction).
pub mod core;

/// Binary operator evaluation.
///
/// Handles the multiplication level of the grammar and the checked integer
/// arithmetic shared by every operator.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles factors: negation, literals, variable reads, and the pre/post
/// increment and decrement operators that write to the variable store.
pub mod unary;
