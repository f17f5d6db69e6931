//! Field definitions and runtime field state.
//!
//! A [`FieldSpec`] describes a single input field: its label, hint text,
//! ordered validators, and an opaque leading-icon reference for the
//! presentation layer. A [`Field`] is the live counterpart the form owns at
//! runtime: the current value, the stored validation error, and whether that
//! error is currently shown.

use formwork_core::{ValidationOutcome, Validator};

/// Definition of a single form field.
///
/// Built with builder-style methods and handed to
/// [`Form::add_fields`](crate::form::Form::add_fields).
///
/// # Examples
///
/// ```
/// use formwork_core::Validator;
/// use formwork_forms::FieldSpec;
///
/// let spec = FieldSpec::new("Email")
///     .hint("you@example.com")
///     .validator(Validator::Required)
///     .validator(Validator::Email);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    /// Human-readable label; unique within a form.
    pub label: String,
    /// Hint/placeholder text for the presentation layer.
    pub hint: String,
    /// Validators, run in this order.
    pub validators: Vec<Validator>,
    /// Opaque leading-icon reference; the core never interprets it.
    pub icon: Option<String>,
}

impl FieldSpec {
    /// Creates a new field definition with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: String::new(),
            validators: Vec::new(),
            icon: None,
        }
    }

    /// Sets the hint text.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Appends a validator.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Appends several validators at once.
    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validators.extend(validators);
        self
    }

    /// Sets the opaque leading-icon reference.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A single labeled input slot owned by a form.
///
/// The value is mutated whenever the presentation layer reports an edit; the
/// stored error is mutated only by validation runs. Whether the error is
/// *shown* is tracked separately so that validate-while-typing can record
/// errors without surfacing them until a submit forces display.
#[derive(Debug, Clone)]
pub struct Field {
    label: String,
    hint: String,
    value: String,
    validators: Vec<Validator>,
    icon: Option<String>,
    error: Option<String>,
    error_shown: bool,
}

impl Field {
    /// Creates a field from its definition.
    ///
    /// The field is validated once at construction with display suppressed,
    /// so a freshly added required field already knows it is invalid without
    /// showing an error before the user has typed anything.
    pub fn new(spec: FieldSpec) -> Self {
        let mut field = Self {
            label: spec.label,
            hint: spec.hint,
            value: String::new(),
            validators: spec.validators,
            icon: spec.icon,
            error: None,
            error_shown: false,
        };
        field.validate(false);
        field
    }

    /// Returns the field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the hint text.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Returns the opaque leading-icon reference, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the current value. Does not run validation.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the validators in attached order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Returns the stored error from the last validation run, shown or not.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the error only if it is currently shown.
    pub fn shown_error(&self) -> Option<&str> {
        if self.error_shown {
            self.error.as_deref()
        } else {
            None
        }
    }

    /// Marks the stored error as shown, if there is one.
    pub fn show_error(&mut self) {
        if self.error.is_some() {
            self.error_shown = true;
        }
    }

    /// Hides the error without discarding it.
    pub fn hide_error(&mut self) {
        self.error_shown = false;
    }

    /// Discards the stored error and hides it.
    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_shown = false;
    }

    /// Runs the validators in attached order, stopping at the first failure.
    ///
    /// The first failing validator's message becomes the stored error; later
    /// validators are not evaluated and cannot overwrite it. When every
    /// validator passes the stored error is cleared. `show` controls whether
    /// a recorded failure is surfaced immediately or kept hidden until
    /// [`show_error`](Self::show_error) is called.
    ///
    /// Returns `true` when the field is valid.
    pub fn validate(&mut self, show: bool) -> bool {
        for validator in &self.validators {
            match validator.validate(&self.value, &self.label) {
                ValidationOutcome::Error(message) => {
                    self.error = Some(message);
                    self.error_shown = show;
                    break;
                }
                ValidationOutcome::Valid(_) => {
                    self.error = None;
                }
            }
        }
        self.error.is_none()
    }

    /// Records every failing validator's message into `slots` by validator
    /// index, leaving passing slots untouched.
    ///
    /// Unlike [`validate`](Self::validate) this does not short-circuit and
    /// does not touch the stored error: it feeds the consolidated-message
    /// formatter, which reports all failures of a field, while the field
    /// itself only ever displays the first. The two deliberately disagree
    /// for a field with several failing validators.
    pub fn record_errors(&self, slots: &mut [String]) {
        for (index, validator) in self.validators.iter().enumerate() {
            let Some(slot) = slots.get_mut(index) else {
                break;
            };
            if let ValidationOutcome::Error(message) = validator.validate(&self.value, &self.label)
            {
                *slot = message;
            }
        }
    }

    /// Resets the value to empty and hides any shown error.
    ///
    /// Validators are not re-run; the stored error is left as it was.
    pub fn clear(&mut self) {
        self.value.clear();
        self.hide_error();
    }

    /// Strips trailing whitespace from the value.
    ///
    /// Skipped when the label is exactly `"Password"` or `"password"`. Note
    /// the deliberate mismatch with [`is_secret`](Self::is_secret): a label
    /// like `"New Password"` is treated as secret for presentation purposes
    /// but is still trimmed here.
    pub fn trim(&mut self) {
        if !matches!(self.label.as_str(), "Password" | "password") {
            let trimmed = self.value.trim_end().len();
            self.value.truncate(trimmed);
        }
    }

    /// Whether the presentation layer should treat this field as a secret
    /// (mask input, offer a visibility toggle).
    ///
    /// Uses substring matching on the label, unlike [`trim`](Self::trim)'s
    /// exact-label check.
    pub fn is_secret(&self) -> bool {
        self.label.contains("Password") || self.label.contains("password")
    }
}

impl From<FieldSpec> for Field {
    fn from(spec: FieldSpec) -> Self {
        Self::new(spec)
    }
}
