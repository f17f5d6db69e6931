//! The form: an aggregation of fields with a combined validity signal and a
//! submit flow.
//!
//! The form owns its fields, runs validation across all of them, caches the
//! aggregate validity as a last-value [`StateSignal`], optionally
//! consolidates all errors into one message, and drives an externally
//! supplied asynchronous submit action.
//!
//! All mutation happens through `&mut self`, so form handling is serialized
//! by construction: a second submit cannot start while the first one's
//! action is still suspended. Disabling the submit control while an action
//! runs remains the caller's responsibility.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use formwork_core::SubmitResult;
use formwork_signals::StateSignal;

use crate::fields::{Field, FieldSpec};
use crate::format;

/// Configuration recognized when constructing a [`Form`].
///
/// # Examples
///
/// ```
/// use formwork_forms::FormOptions;
///
/// let options = FormOptions {
///     single_error: true,
///     reactive: true,
///     ..FormOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Consolidate all field errors into one message instead of per-field
    /// inline errors.
    pub single_error: bool,
    /// Validate as the user types and drive submit enablement from the
    /// aggregate; off means validate-on-submit-only.
    pub reactive: bool,
    /// Optional label for the presentation layer's submit control.
    pub submit_label: Option<String>,
}

/// Callbacks the presentation layer registers on a form.
///
/// Both methods default to no-ops so a listener may implement only the
/// events it cares about.
pub trait FormListener: Send + Sync {
    /// Invoked with the submit action's result after a valid submit.
    fn on_submit(&self, _result: SubmitResult) {}

    /// Invoked after any field value change with the current label-to-value
    /// map.
    fn on_data_change(&self, _data: HashMap<String, String>) {}
}

/// The externally supplied asynchronous submit operation.
///
/// Implemented for any async closure returning a [`SubmitResult`], so the
/// usual way to provide one is:
///
/// ```
/// use formwork_forms::{Form, FormOptions};
///
/// let mut form = Form::new(FormOptions::default());
/// form.set_submit_action(|| async { Ok(()) });
/// ```
#[async_trait]
pub trait SubmitAction: Send + Sync {
    /// Runs the submit operation to completion or failure. No cancellation
    /// path is offered.
    async fn run(&self) -> SubmitResult;
}

#[async_trait]
impl<F, Fut> SubmitAction for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = SubmitResult> + Send + 'static,
{
    async fn run(&self) -> SubmitResult {
        self().await
    }
}

/// An aggregation of labeled fields with a combined validity signal.
///
/// Fields are kept in insertion order and looked up by label. The cached
/// aggregate validity is always the logical AND of all fields' validity as
/// of the last [`recompute`](Self::recompute); it is never set
/// independently.
///
/// # Examples
///
/// ```
/// use formwork_core::Validator;
/// use formwork_forms::{FieldSpec, Form, FormOptions};
///
/// let mut form = Form::new(FormOptions::default());
/// form.add_fields([
///     FieldSpec::new("Email")
///         .validator(Validator::Required)
///         .validator(Validator::Email),
/// ]);
///
/// form.set_value("Email", "alice@example.com");
/// assert!(form.is_valid());
/// ```
pub struct Form {
    fields: Vec<Field>,
    options: FormOptions,
    validity: StateSignal<bool>,
    consolidated_error: Option<String>,
    single_error_shown: bool,
    submit_enabled: bool,
    submit_action: Option<Box<dyn SubmitAction>>,
    listener: Option<Box<dyn FormListener>>,
    subscriptions: Vec<String>,
}

impl Form {
    /// Creates an empty form with the given options.
    pub fn new(options: FormOptions) -> Self {
        Self {
            fields: Vec::new(),
            options,
            validity: StateSignal::new(false),
            consolidated_error: None,
            single_error_shown: false,
            submit_enabled: false,
            submit_action: None,
            listener: None,
            subscriptions: Vec::new(),
        }
    }

    /// Returns the form's configuration.
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    // ── Field set mutation ───────────────────────────────────────────

    /// Appends fields, one after another.
    ///
    /// Adding a field with a label that already exists silently replaces the
    /// prior entry in place; exactly one entry per label remains. After
    /// every single insertion the change hooks are reinstalled across all
    /// fields, so every field has one after any mutation. Adding fields does
    /// not recompute the aggregate: a new field's (hidden) error only enters
    /// the aggregate on the next validation pass.
    pub fn add_fields(&mut self, specs: impl IntoIterator<Item = FieldSpec>) {
        for spec in specs {
            self.insert_field(spec, None);
        }
    }

    /// Inserts fields at consecutive positions starting at `at`.
    ///
    /// Positions past the end append. Duplicate-label semantics match
    /// [`add_fields`](Self::add_fields).
    pub fn insert_fields(&mut self, specs: impl IntoIterator<Item = FieldSpec>, at: usize) {
        let mut position = at;
        for spec in specs {
            self.insert_field(spec, Some(position));
            position += 1;
        }
    }

    fn insert_field(&mut self, spec: FieldSpec, at: Option<usize>) {
        let field = Field::new(spec);
        debug!(label = field.label(), "adding field");

        if let Some(existing) = self.fields.iter().position(|f| f.label() == field.label()) {
            self.fields[existing] = field;
        } else {
            match at {
                Some(index) if index <= self.fields.len() => self.fields.insert(index, field),
                _ => self.fields.push(field),
            }
        }

        self.rebuild_subscriptions();
    }

    /// Detaches and forgets the field with the given label.
    ///
    /// Absent labels are silently ignored.
    pub fn remove_field(&mut self, label: &str) {
        if let Some(position) = self.fields.iter().position(|f| f.label() == label) {
            self.fields.remove(position);
            self.subscriptions.retain(|l| l != label);
            debug!(label, "removed field");
        }
    }

    /// Reinstalls the change hook of every field.
    ///
    /// The guarantee preserved here is that all fields have a change hook
    /// after any mutation of the field set, so a value edit on any of them
    /// drives the change pipeline.
    fn rebuild_subscriptions(&mut self) {
        self.subscriptions.clear();
        for field in &self.fields {
            self.subscriptions.push(field.label().to_string());
        }
    }

    /// Whether a change hook is installed for the given label.
    pub fn has_change_hook(&self, label: &str) -> bool {
        self.subscriptions.iter().any(|l| l == label)
    }

    // ── Field access ─────────────────────────────────────────────────

    /// Returns the field with the given label.
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label() == label)
    }

    /// Returns all fields in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the current label-to-value map.
    pub fn data(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.label().to_string(), f.value().to_string()))
            .collect()
    }

    // ── Change pipeline ──────────────────────────────────────────────

    /// Reports a value edit from the presentation layer.
    ///
    /// The field's value is replaced; if the field has a change hook
    /// installed, all shown errors are cleared, the form is recomputed, and
    /// the listener's `on_data_change` is notified with the current data.
    /// Unknown labels are ignored.
    pub fn set_value(&mut self, label: &str, value: impl Into<String>) {
        let Some(position) = self.fields.iter().position(|f| f.label() == label) else {
            return;
        };
        self.fields[position].set_value(value);

        if self.has_change_hook(label) {
            self.on_field_changed();
        }
    }

    /// Reports that a field lost focus.
    ///
    /// Trailing whitespace is trimmed from the value and routed through the
    /// normal change pipeline, except for the label exactly `"Password"`
    /// (note: narrower than both the trim exemption list and the secret
    /// check; preserved as given).
    pub fn on_focus_lost(&mut self, label: &str) {
        if label == "Password" {
            return;
        }
        let Some(field) = self.fields.iter().find(|f| f.label() == label) else {
            return;
        };
        let trimmed = field.value().trim_end().to_string();
        self.set_value(label, trimmed);
    }

    /// Clears a field's value and hides its error, without re-running
    /// validators or touching the aggregate.
    pub fn clear_field(&mut self, label: &str) {
        if let Some(position) = self.fields.iter().position(|f| f.label() == label) {
            self.fields[position].clear();
        }
    }

    fn on_field_changed(&mut self) {
        self.remove_errors();
        self.recompute();

        if let Some(listener) = &self.listener {
            listener.on_data_change(self.data());
        }
    }

    fn remove_errors(&mut self) {
        if self.options.single_error {
            self.hide_single_error();
        } else {
            for field in &mut self.fields {
                field.clear_error();
            }
        }
    }

    // ── Validation pass ──────────────────────────────────────────────

    /// Runs the validation pass over every field and refreshes all derived
    /// state.
    ///
    /// Per field this runs the short-circuiting
    /// [`Field::validate`](crate::fields::Field::validate) (with display
    /// controlled by reactive mode) and additionally records every failing
    /// validator into a slot array sized to the field's validator count for
    /// the consolidated formatter. The aggregate is the logical AND across
    /// all per-field results and is pushed into the validity signal on every
    /// pass, whether or not it changed.
    ///
    /// In single-error mode the consolidated message is rebuilt, and shown
    /// immediately when also reactive. In reactive mode the submit
    /// enablement follows the aggregate.
    pub fn recompute(&mut self) -> bool {
        let reactive = self.options.reactive;
        let mut aggregate = true;
        let mut error_slots = Vec::with_capacity(self.fields.len());

        for field in &mut self.fields {
            let ok = field.validate(reactive);
            let mut slots = vec![String::new(); field.validators().len()];
            field.record_errors(&mut slots);
            aggregate &= ok;
            error_slots.push(slots);
        }

        if self.options.single_error {
            self.consolidated_error = format::consolidate(&error_slots);
            if reactive {
                self.single_error_shown = self.consolidated_error.is_some();
            }
        }

        if reactive {
            self.submit_enabled = aggregate;
        }

        debug!(valid = aggregate, "recomputed form validity");
        self.validity.set(aggregate);
        aggregate
    }

    /// The observable validity signal: a boolean with last-value semantics,
    /// pushed on every [`recompute`](Self::recompute).
    pub fn validity(&self) -> &StateSignal<bool> {
        &self.validity
    }

    /// The cached aggregate validity as of the last validation pass.
    pub fn is_valid(&self) -> bool {
        self.validity.get()
    }

    /// Whether the submit control should be enabled (reactive mode only;
    /// always `false` before the first reactive recompute).
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    // ── Error presentation state ─────────────────────────────────────

    /// The consolidated error message from the last validation pass, shown
    /// or not. Always `None` outside single-error mode.
    pub fn consolidated_error(&self) -> Option<&str> {
        self.consolidated_error.as_deref()
    }

    /// The consolidated error message, only if currently shown.
    pub fn shown_consolidated_error(&self) -> Option<&str> {
        if self.single_error_shown {
            self.consolidated_error.as_deref()
        } else {
            None
        }
    }

    fn show_errors(&mut self) {
        if self.options.single_error {
            self.show_single_error();
        } else {
            for field in &mut self.fields {
                field.show_error();
            }
        }
    }

    fn show_single_error(&mut self) {
        if self.consolidated_error.is_some() {
            self.single_error_shown = true;
        }
    }

    fn hide_single_error(&mut self) {
        self.single_error_shown = false;
    }

    // ── Submit flow ──────────────────────────────────────────────────

    /// Sets the asynchronous submit action.
    pub fn set_submit_action(&mut self, action: impl SubmitAction + 'static) {
        self.submit_action = Some(Box::new(action));
    }

    /// Sets the listener receiving submit results and data changes.
    pub fn set_listener(&mut self, listener: impl FormListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Triggers the submit flow.
    ///
    /// Every field's value is trimmed, the form is recomputed, and when not
    /// reactive the error display is forced for all fields (or the single
    /// consolidated message) regardless of the suppression used while
    /// typing. If the aggregate is valid and an action is set, the action
    /// runs exactly once and its result is forwarded to the listener's
    /// `on_submit`; otherwise nothing is invoked and no listener callback
    /// fires.
    ///
    /// The click-to-action sequence is atomic from the caller's perspective:
    /// this method holds `&mut self` across the action's suspension, so no
    /// second submit can interleave.
    pub async fn submit(&mut self) {
        debug!("submit triggered");

        for field in &mut self.fields {
            field.trim();
        }

        self.recompute();

        if !self.options.reactive {
            self.show_errors();
        }

        if !self.validity.get() {
            debug!("submit skipped: form invalid");
            return;
        }

        if let Some(action) = &self.submit_action {
            let result = action.run().await;
            debug!(ok = result.is_ok(), "submit action finished");
            if let Some(listener) = &self.listener {
                listener.on_submit(result);
            }
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}
