/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Represents the operator that joins a statement's target and its
/// expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignmentOperator {
    /// Plain assignment (`=`)
    Assign,
    /// Add to the current value (`+=`)
    AddAssign,
    /// Subtract from the current value (`-=`)
    SubAssign,
}

impl AssignmentOperator {
    /// Assignment operators in the order a line is searched for them.
    ///
    /// The compound operators come first because both of them contain `=`.
    pub const DETECTION_ORDER: [Self; 3] = [Self::AddAssign, Self::SubAssign, Self::Assign];

    /// Returns the source text of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
        }
    }

    /// Finds the operator a statement uses.
    ///
    /// This is a substring search, not a parse: the first operator of
    /// [`Self::DETECTION_ORDER`] that occurs anywhere in `line` wins.
    ///
    /// # Example
    /// ```
    /// use varcalc::operator::AssignmentOperator;
    ///
    /// assert_eq!(AssignmentOperator::detect("a += 1"), Some(AssignmentOperator::AddAssign));
    /// assert_eq!(AssignmentOperator::detect("a = -1"), Some(AssignmentOperator::Assign));
    /// assert_eq!(AssignmentOperator::detect("a -= 1"), Some(AssignmentOperator::SubAssign));
    /// assert_eq!(AssignmentOperator::detect("a 1"), None);
    /// ```
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        Self::DETECTION_ORDER.into_iter().find(|op| line.contains(op.symbol()))
    }

    /// Combines the variable's current value with the evaluated right-hand
    /// side.
    ///
    /// Returns `None` for `=`, which ignores the current value, so callers
    /// only read the store when they need to. Compound forms return the
    /// arithmetic operator to apply as `current <op> value`.
    #[must_use]
    pub const fn arithmetic(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
        }
    }
}

impl std::fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
