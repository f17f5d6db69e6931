//! Error types for the form engine.
//!
//! Validation failures are not errors in the Rust sense: they are
//! user-facing message strings carried by
//! [`ValidationOutcome::Error`](crate::ValidationOutcome) and are always
//! recoverable by correcting input. The types here cover the second half of
//! the taxonomy: failures reported by the externally supplied submit action.

use thiserror::Error;

/// An opaque failure produced by a form's submit action.
///
/// The form never inspects or propagates this error; it is forwarded
/// verbatim to the listener's `on_submit` callback for presentation-layer
/// handling.
///
/// # Examples
///
/// ```
/// use formwork_core::SubmitError;
///
/// let err = SubmitError::new("account already exists");
/// assert_eq!(err.to_string(), "account already exists");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    /// Creates a new submit failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The result of running a submit action.
pub type SubmitResult = Result<(), SubmitError>;
