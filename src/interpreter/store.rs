use indexmap::IndexMap;

/// The named integer variables of a session.
///
/// Variables keep the order in which they were first assigned. Reading a
/// variable that was never assigned yields `0` and does not create it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    values: IndexMap<String, i64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, or `0` if it was never assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or(0)
    }

    /// Stores `value` under `name`.
    ///
    /// A new name is appended after all existing ones; an existing name keeps
    /// its position.
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    /// Returns the number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable was assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the variables in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the underlying insertion-ordered map.
    #[must_use]
    pub const fn as_map(&self) -> &IndexMap<String, i64> {
        &self.values
    }
}

impl<'a> IntoIterator for &'a VariableStore {
    type IntoIter = indexmap::map::Iter<'a, String, i64>;
    type Item = (&'a String, &'a i64);

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Formats the store on one line, as `(i=1,j=2)`, or `()` when empty.
impl std::fmt::Display for VariableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}
