//! # formwork
//!
//! Headless form-input widgets for Rust: labeled fields with pluggable
//! validation, aggregate form-level validity tracking, and error
//! presentation state. Rendering, animation, and focus handling belong to
//! the host UI; formwork is the engine behind it.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `formwork` to get everything, or depend on
//! individual crates for finer-grained control.
//!
//! ## Example
//!
//! ```
//! use formwork::core::Validator;
//! use formwork::forms::{FieldSpec, Form, FormOptions};
//!
//! let mut form = Form::new(FormOptions {
//!     reactive: true,
//!     ..FormOptions::default()
//! });
//! form.add_fields([
//!     FieldSpec::new("Email")
//!         .hint("you@example.com")
//!         .validator(Validator::Required)
//!         .validator(Validator::Email),
//!     FieldSpec::new("Password")
//!         .validator(Validator::Required)
//!         .validator(Validator::Password),
//! ]);
//!
//! form.set_value("Email", "alice@example.com");
//! form.set_value("Password", "Abcdef1!");
//! assert!(form.is_valid());
//! assert!(form.submit_enabled());
//! ```

/// Core types: validation outcomes, built-in validators, and error types.
pub use formwork_core as core;

/// Signal dispatch: decoupled observers and last-value state signals.
#[cfg(feature = "signals")]
pub use formwork_signals as signals;

/// The form engine: fields, forms, consolidated errors, and the submit flow.
#[cfg(feature = "forms")]
pub use formwork_forms as forms;

/// Re-export of the `async_trait` attribute for hand-written
/// `SubmitAction` implementations.
pub use async_trait::async_trait;
