//! Field values.

/// Current value of a field: a single string or a list of selected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A scalar value.
    Single(String),
    /// Several selected values, in selection order.
    Multi(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl FieldValue {
    /// Returns the value as one string, list values joined with `,`.
    pub fn joined(&self) -> String {
        match self {
            Self::Single(v) => v.clone(),
            Self::Multi(vs) => vs.join(","),
        }
    }

    /// Returns the individual selected values.
    ///
    /// A scalar is split on `,` so that a stored `"1,2"` selects both
    /// options of a multi-value control.
    pub fn selected(&self) -> Vec<&str> {
        match self {
            Self::Single(v) => v.split(',').filter(|s| !s.is_empty()).collect(),
            Self::Multi(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    /// Whether `candidate` equals a scalar value.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Single(v) => v == candidate,
            Self::Multi(vs) => vs.len() == 1 && vs[0] == candidate,
        }
    }

    /// Whether `candidate` is one of the selected values.
    pub fn contains(&self, candidate: &str) -> bool {
        self.selected().contains(&candidate)
    }

    /// Truthiness of the value: empty and `"0"` are false.
    pub fn is_truthy(&self) -> bool {
        is_truthy(&self.joined())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

/// Empty strings and `"0"` are false, everything else is true.
pub(crate) fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
