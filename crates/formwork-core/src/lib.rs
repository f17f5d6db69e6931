//! # formwork-core
//!
//! Core types for the formwork form library. This crate has zero internal
//! dependencies and provides the foundation for the other crates.
//!
//! ## Modules
//!
//! - [`outcome`] - The [`ValidationOutcome`] sum type
//! - [`validators`] - Built-in and custom validation rules
//! - [`error`] - Submit-action failure types
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod outcome;
pub mod validators;

// Re-export the most commonly used types at the crate root.
pub use error::{SubmitError, SubmitResult};
pub use outcome::ValidationOutcome;
pub use validators::{CustomValidator, Validator, PASSWORD_SYMBOLS};
