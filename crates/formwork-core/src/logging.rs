//! Logging integration for the form engine.
//!
//! Provides helpers for configuring [`tracing`]-based logging and for
//! creating per-form spans. The engine itself only emits `tracing` events;
//! installing a subscriber is the host application's choice.

/// Sets up a global tracing subscriber.
///
/// `level` is an `EnvFilter` directive string (e.g. "debug", "info",
/// "formwork_forms=trace"); invalid directives fall back to "info". When
/// `pretty` is true a human-readable format is used; otherwise a structured
/// JSON format. Installation is best-effort: if a subscriber is already set,
/// this is a no-op.
pub fn init_logging(level: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form's event handling.
///
/// Attach this span around the host's event dispatch so that log entries
/// emitted during validation and submit handling carry the form name.
///
/// # Examples
///
/// ```
/// use formwork_core::logging::form_span;
///
/// let span = form_span("signup");
/// let _guard = span.enter();
/// tracing::debug!("handling field change");
/// ```
pub fn form_span(form: &str) -> tracing::Span {
    tracing::debug_span!("form", name = form)
}
