//! # formwork-forms
//!
//! The form engine for the formwork library. Provides labeled input fields
//! with ordered validators, a form that aggregates per-field validity into
//! one observable boolean, consolidated error formatting, and an
//! asynchronous submit flow.
//!
//! Rendering is out of scope: the presentation layer pushes value and focus
//! events in via [`Form::set_value`](form::Form::set_value) and friends, and
//! reads validity and error-display state back.

pub mod fields;
pub mod form;
pub mod format;

// Re-export the most commonly used types at the crate root.
pub use fields::{Field, FieldSpec};
pub use form::{Form, FormListener, FormOptions, SubmitAction};
