//! Error types for form rendering.

use indexmap::IndexMap;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Default decorators were set under a name that is neither
    /// `decorators` nor `decorators_confirm`.
    #[error("unknown decorator set: {0} (expected `decorators` or `decorators_confirm`)")]
    UnknownDecoratorSet(String),

    /// A configured decorator step could not be built.
    #[error("invalid decorator {name}: {message}")]
    InvalidDecorator { name: String, message: String },

    /// Site configuration could not be parsed.
    #[error("failed to parse site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Collection of validation messages by field.
///
/// Messages are produced elsewhere; this type only carries them to the
/// form so the `Errors` decorator can display them.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Messages keyed by field name, in insertion order.
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    /// Adds a message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any messages.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns messages for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
