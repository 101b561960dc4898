/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing a line:
/// malformed statements, invalid variable names, unexpected characters and
/// tokens, and literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing a value, which are division by
/// zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure raised while evaluating a statement.
///
/// Scanning and evaluation are fused, so a single evaluation can fail with
/// either kind of error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be scanned or parsed.
    Parse(ParseError),
    /// The line was well formed but its value could not be computed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
