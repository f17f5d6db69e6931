//! The result of evaluating a single validator against a field value.

/// The outcome of one validator evaluation.
///
/// Evaluation is total: every `(value, label)` pair produces exactly one
/// variant, and evaluating twice with identical inputs yields identical
/// outcomes. Validators never panic and never perform side effects.
///
/// # Examples
///
/// ```
/// use formwork_core::{ValidationOutcome, Validator};
///
/// let outcome: ValidationOutcome = Validator::Required.validate("hello", "Name");
/// assert!(outcome.is_valid());
///
/// let outcome = Validator::Required.validate("   ", "Name");
/// assert_eq!(outcome.message(), Some("Name cannot be empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value passed the rule; carries the validated value.
    Valid(String),
    /// The value failed the rule; carries the user-facing message.
    Error(String),
}

impl ValidationOutcome {
    /// Creates a passing outcome carrying the validated value.
    pub fn valid(value: impl Into<String>) -> Self {
        Self::Valid(value.into())
    }

    /// Creates a failing outcome carrying a user-facing message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Returns `true` if the value passed the rule.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the error message, or `None` for a passing outcome.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    /// Consumes the outcome, returning the error message if any.
    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Valid(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}
