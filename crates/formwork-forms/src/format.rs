//! Consolidated error formatting.
//!
//! When a form runs in single-error mode, the per-field error slot arrays
//! produced by a validation pass are flattened into one bulleted message.

/// Builds a single consolidated message from per-field error slot arrays.
///
/// Each non-blank entry becomes its own `• message` line, preserving field
/// order and then validator order within a field. Trailing whitespace is
/// trimmed from the final result. Returns `None` when there is nothing to
/// show; the absence of errors is never an empty string.
///
/// # Examples
///
/// ```
/// use formwork_forms::format::consolidate;
///
/// let slots = vec![
///     vec![String::new(), "X is too short".to_string()],
///     vec!["Y cannot be empty".to_string()],
/// ];
/// assert_eq!(
///     consolidate(&slots).as_deref(),
///     Some("• X is too short\n• Y cannot be empty"),
/// );
/// ```
pub fn consolidate(errors: &[Vec<String>]) -> Option<String> {
    let mut message = String::new();
    for field_errors in errors {
        for error in field_errors {
            if !error.trim().is_empty() {
                message.push_str("• ");
                message.push_str(error);
                message.push('\n');
            }
        }
    }

    let message = message.trim_end();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
