//! Integration tests for the field -> form -> submit pipeline.
//!
//! These tests exercise the complete flow the presentation layer drives:
//! 1. Typing and the change pipeline (reactive and not)
//! 2. Error presentation (per-field inline vs. single consolidated message)
//! 3. The submit flow (trim, forced display, action invocation, listener)
//! 4. Validity observation through the state signal

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use formwork_core::{SubmitError, SubmitResult, Validator};
use formwork_forms::{FieldSpec, Form, FormListener, FormOptions, SubmitAction};

// ============================================================================
// Shared helpers
// ============================================================================

/// A signup form with email and password fields, like a typical login UI.
fn make_signup_form(options: FormOptions) -> Form {
    let mut form = Form::new(options);
    form.add_fields([
        FieldSpec::new("Email")
            .hint("Email")
            .validator(Validator::Required)
            .validator(Validator::Email),
        FieldSpec::new("Password")
            .hint("Password")
            .validator(Validator::Required)
            .validator(Validator::Password),
    ]);
    form
}

fn fill_valid(form: &mut Form) {
    form.set_value("Email", "alice@example.com");
    form.set_value("Password", "Abcdef1!");
}

/// Submit action that counts invocations and returns a fixed result.
struct CountingAction {
    calls: Arc<AtomicUsize>,
    fail_with: Option<String>,
}

#[async_trait]
impl SubmitAction for CountingAction {
    async fn run(&self) -> SubmitResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(SubmitError::new(message.clone())),
            None => Ok(()),
        }
    }
}

/// Listener that records every callback it receives.
#[derive(Default)]
struct CapturingListener {
    submits: Arc<Mutex<Vec<SubmitResult>>>,
    changes: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FormListener for CapturingListener {
    fn on_submit(&self, result: SubmitResult) {
        self.submits.lock().unwrap().push(result);
    }

    fn on_data_change(&self, data: HashMap<String, String>) {
        self.changes.lock().unwrap().push(data);
    }
}

// ============================================================================
// 1. Typing and the change pipeline
// ============================================================================

#[test]
fn test_typing_reaches_listener_with_current_data() {
    let mut form = make_signup_form(FormOptions::default());
    let listener = CapturingListener::default();
    let changes = listener.changes.clone();
    form.set_listener(listener);

    form.set_value("Email", "a");
    form.set_value("Email", "al");

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[1].get("Email").map(String::as_str), Some("al"));
    assert_eq!(changes[1].get("Password").map(String::as_str), Some(""));
}

#[test]
fn test_typing_clears_previously_shown_errors() {
    let mut form = make_signup_form(FormOptions {
        reactive: true,
        ..FormOptions::default()
    });

    form.set_value("Email", "bad");
    assert!(form.field("Email").unwrap().shown_error().is_some());

    form.set_value("Email", "alice@example.com");
    assert_eq!(form.field("Email").unwrap().shown_error(), None);
}

#[test]
fn test_field_added_after_construction_gets_a_change_hook() {
    let mut form = make_signup_form(FormOptions::default());
    let listener = CapturingListener::default();
    let changes = listener.changes.clone();
    form.set_listener(listener);

    form.add_fields([FieldSpec::new("Phone").validator(Validator::PhoneNumber)]);
    form.set_value("Phone", "0123456789");

    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn test_required_then_email_short_circuit_through_form() {
    let mut form = make_signup_form(FormOptions::default());
    form.recompute();
    assert_eq!(
        form.field("Email").unwrap().error(),
        Some("Email cannot be empty"),
    );
}

#[test]
fn test_password_priority_through_form() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_value("Password", "ALLCAPS");
    assert_eq!(
        form.field("Password").unwrap().error(),
        Some("Password must contain a small letter, a-z"),
    );
}

#[test]
fn test_custom_validator_through_form() {
    let mut form = Form::new(FormOptions::default());
    form.add_fields([FieldSpec::new("Username").validator(Validator::predicate(
        "NoSpaces",
        |value| !value.contains(' '),
        "Username may not contain spaces",
    ))]);

    form.set_value("Username", "a lice");
    assert!(!form.recompute());
    assert_eq!(
        form.field("Username").unwrap().error(),
        Some("Username may not contain spaces"),
    );
}

// ============================================================================
// 2. Error presentation
// ============================================================================

#[test]
fn test_inline_errors_stay_hidden_until_submit_when_not_reactive() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_value("Email", "bad");

    let field = form.field("Email").unwrap();
    assert!(field.error().is_some());
    assert_eq!(field.shown_error(), None);
}

#[test]
fn test_consolidated_message_orders_fields_then_validators() {
    let mut form = Form::new(FormOptions {
        single_error: true,
        ..FormOptions::default()
    });
    form.add_fields([
        FieldSpec::new("X").validator(Validator::MinLength(3)),
        FieldSpec::new("Y").validator(Validator::Required),
    ]);
    form.set_value("X", "ab");

    assert_eq!(
        form.consolidated_error(),
        Some("• X is too short\n• Y cannot be empty"),
    );
}

#[tokio::test]
async fn test_submit_forces_display_in_single_error_mode() {
    let mut form = make_signup_form(FormOptions {
        single_error: true,
        ..FormOptions::default()
    });

    form.set_value("Email", "bad");
    assert_eq!(form.shown_consolidated_error(), None);

    form.submit().await;
    assert!(form.shown_consolidated_error().is_some());
}

#[tokio::test]
async fn test_submit_forces_display_per_field() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_value("Email", "bad");

    form.submit().await;
    assert_eq!(
        form.field("Email").unwrap().shown_error(),
        Some("Email is not a valid email"),
    );
    assert_eq!(
        form.field("Password").unwrap().shown_error(),
        Some("Password cannot be empty"),
    );
}

// ============================================================================
// 3. Submit flow
// ============================================================================

#[tokio::test]
async fn test_submit_invalid_never_invokes_action_or_listener() {
    let mut form = make_signup_form(FormOptions::default());
    let calls = Arc::new(AtomicUsize::new(0));
    form.set_submit_action(CountingAction {
        calls: calls.clone(),
        fail_with: None,
    });
    let listener = CapturingListener::default();
    let submits = listener.submits.clone();
    form.set_listener(listener);

    form.submit().await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(submits.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_valid_invokes_action_exactly_once() {
    let mut form = make_signup_form(FormOptions::default());
    let calls = Arc::new(AtomicUsize::new(0));
    form.set_submit_action(CountingAction {
        calls: calls.clone(),
        fail_with: None,
    });
    let listener = CapturingListener::default();
    let submits = listener.submits.clone();
    form.set_listener(listener);

    fill_valid(&mut form);
    form.submit().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let submits = submits.lock().unwrap();
    assert_eq!(submits.len(), 1);
    assert!(submits[0].is_ok());
}

#[tokio::test]
async fn test_submit_failure_is_forwarded_not_raised() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_submit_action(CountingAction {
        calls: Arc::new(AtomicUsize::new(0)),
        fail_with: Some("account already exists".to_string()),
    });
    let listener = CapturingListener::default();
    let submits = listener.submits.clone();
    form.set_listener(listener);

    fill_valid(&mut form);
    form.submit().await;

    let submits = submits.lock().unwrap();
    assert_eq!(submits.len(), 1);
    assert_eq!(
        submits[0].as_ref().unwrap_err().message(),
        "account already exists",
    );
}

#[tokio::test]
async fn test_submit_with_async_closure_action() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_submit_action(|| async { Ok(()) });
    let listener = CapturingListener::default();
    let submits = listener.submits.clone();
    form.set_listener(listener);

    fill_valid(&mut form);
    form.submit().await;

    assert_eq!(submits.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_trims_values_first() {
    let mut form = make_signup_form(FormOptions::default());
    let calls = Arc::new(AtomicUsize::new(0));
    form.set_submit_action(CountingAction {
        calls: calls.clone(),
        fail_with: None,
    });

    // trailing whitespace would fail the email rule; submit trims it away
    form.set_value("Email", "alice@example.com   ");
    form.set_value("Password", "Abcdef1!");
    form.submit().await;

    assert_eq!(form.field("Email").unwrap().value(), "alice@example.com");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_submit_does_not_trim_password_value() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_value("Password", "Abcdef1!  ");
    form.submit().await;
    assert_eq!(form.field("Password").unwrap().value(), "Abcdef1!  ");
}

#[tokio::test]
async fn test_submit_without_action_notifies_nobody() {
    let mut form = make_signup_form(FormOptions::default());
    let listener = CapturingListener::default();
    let submits = listener.submits.clone();
    form.set_listener(listener);

    fill_valid(&mut form);
    form.submit().await;

    assert!(submits.lock().unwrap().is_empty());
}

// ============================================================================
// 4. Validity observation
// ============================================================================

#[test]
fn test_validity_signal_history_during_typing() {
    let mut form = make_signup_form(FormOptions {
        reactive: true,
        ..FormOptions::default()
    });
    let history = Arc::new(Mutex::new(Vec::new()));
    let h = history.clone();
    form.validity().connect(
        "observer",
        Arc::new(move |valid: &bool| {
            h.lock().unwrap().push(*valid);
        }),
    );

    form.set_value("Email", "alice@example.com");
    form.set_value("Password", "Abcdef1!");

    // replay of the initial false, then one push per recompute,
    // even when the value repeats
    assert_eq!(*history.lock().unwrap(), vec![false, false, true]);
    assert!(form.is_valid());
}

#[test]
fn test_correcting_invalid_field_flips_aggregate() {
    let mut form = make_signup_form(FormOptions::default());
    form.set_value("Email", "alice@example.com");
    form.set_value("Password", "short");
    assert!(!form.recompute());

    form.set_value("Password", "Abcdef1!");
    assert!(form.recompute());
}
