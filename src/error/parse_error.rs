#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning or parsing a line.
pub enum ParseError {
    /// The line does not have the shape `name <op> expression`.
    Syntax {
        /// Details about what is malformed, including the offending line.
        details: String,
    },
    /// A variable name does not follow the identifier grammar.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// The scanner met a character outside the recognized set.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
    },
    /// A token that cannot start a factor was found in factor position.
    UnexpectedToken {
        /// Literal text of the token. Empty for the end of input.
        token: String,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The digits of the literal.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { details } => write!(f, "{details}"),

            Self::InvalidVariableName { name } if name.ends_with('_') => write!(f,
                                                                               "Invalid variable name: cannot end with underscore ({name})"),
            Self::InvalidVariableName { name } => write!(f, "Invalid variable name: {name}"),

            Self::UnexpectedCharacter { character } => {
                write!(f, "Unexpected character: {character}")
            },

            Self::UnexpectedToken { token } if token.is_empty() => {
                write!(f, "Unexpected token in expression: end of input")
            },
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token in expression: {token}")
            },

            Self::LiteralTooLarge { literal } => write!(f, "Literal is too large: {literal}"),
        }
    }
}

impl std::error::Error for ParseError {}
