//! # formwork-signals
//!
//! Signal dispatch for the formwork form library. Provides a decoupled
//! observer system so the presentation layer can watch form state (validity,
//! data changes) without the form engine knowing anything about rendering.
//!
//! Two primitives:
//!
//! - [`Signal`] - fire-and-forget dispatch to receivers registered under an
//!   explicit id
//! - [`StateSignal`] - a signal that also stores its last value, replays it
//!   to newly connected receivers, and dispatches on every set (last-value
//!   semantics, not edge-triggered)
//!
//! ## Usage
//!
//! ```
//! use formwork_signals::StateSignal;
//! use std::sync::Arc;
//!
//! let validity = StateSignal::new(false);
//!
//! validity.connect("submit_button", Arc::new(|valid: &bool| {
//!     println!("form valid: {valid}");
//! }));
//!
//! validity.set(true);
//! assert!(validity.get());
//! ```

use std::sync::{Arc, RwLock};

/// The type signature for a signal receiver callback.
///
/// Receivers accept a reference to the signal payload. They must be
/// `Send + Sync` so that signals can be dispatched from any thread.
pub type SignalReceiver<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A signal that can be connected to and dispatched.
///
/// Each signal carries a payload type `T`. Receivers are registered under an
/// explicit id and are called in the order they were connected; reconnecting
/// under an existing id replaces the previous receiver in place.
///
/// # Examples
///
/// ```
/// use formwork_signals::Signal;
/// use std::sync::Arc;
///
/// let signal: Signal<String> = Signal::new();
///
/// signal.connect("logger", Arc::new(|msg: &String| {
///     println!("field changed: {msg}");
/// }));
///
/// signal.send(&"Email".to_string());
/// ```
pub struct Signal<T: 'static> {
    receivers: RwLock<Vec<(String, SignalReceiver<T>)>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    /// Creates a new signal with no connected receivers.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(Vec::new()),
        }
    }

    /// Connects a receiver to this signal.
    ///
    /// The `receiver_id` identifies the receiver for later disconnection.
    /// If a receiver with the same id is already connected, it is replaced.
    pub fn connect(&self, receiver_id: impl Into<String>, callback: SignalReceiver<T>) {
        let id = receiver_id.into();
        let mut receivers = self.receivers.write().expect("signal lock poisoned");

        if let Some(entry) = receivers.iter_mut().find(|(rid, _)| *rid == id) {
            entry.1 = callback;
        } else {
            receivers.push((id, callback));
        }
    }

    /// Disconnects the receiver with the given id.
    ///
    /// Returns `true` if a receiver was found and removed.
    pub fn disconnect(&self, receiver_id: &str) -> bool {
        let mut receivers = self.receivers.write().expect("signal lock poisoned");
        let len_before = receivers.len();
        receivers.retain(|(id, _)| id != receiver_id);
        receivers.len() < len_before
    }

    /// Sends the signal to all connected receivers, in connection order.
    pub fn send(&self, payload: &T) {
        let receivers = self.receivers.read().expect("signal lock poisoned");
        for (_, callback) in receivers.iter() {
            callback(payload);
        }
    }

    /// Returns the number of connected receivers.
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().expect("signal lock poisoned").len()
    }
}

/// A signal that stores its current value.
///
/// `StateSignal` models observable state rather than discrete events: it
/// holds the last value set, replays that value to a receiver at connect
/// time, and dispatches to all receivers on every [`set`](Self::set) call,
/// whether or not the value changed. A form's aggregate validity is carried
/// by a `StateSignal<bool>`.
///
/// # Examples
///
/// ```
/// use formwork_signals::StateSignal;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let signal = StateSignal::new(false);
/// let seen = Arc::new(AtomicUsize::new(0));
///
/// let s = seen.clone();
/// signal.connect("observer", Arc::new(move |_: &bool| {
///     s.fetch_add(1, Ordering::SeqCst);
/// }));
/// // the current value is replayed at connect time
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
///
/// signal.set(false); // unchanged values still dispatch
/// assert_eq!(seen.load(Ordering::SeqCst), 2);
/// ```
pub struct StateSignal<T: 'static> {
    value: RwLock<T>,
    signal: Signal<T>,
}

impl<T: Clone + 'static> StateSignal<T> {
    /// Creates a new state signal holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            signal: Signal::new(),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().expect("state lock poisoned").clone()
    }

    /// Stores a new value and dispatches it to all receivers.
    ///
    /// Dispatch happens on every call, including when the new value equals
    /// the old one.
    pub fn set(&self, value: T) {
        {
            let mut stored = self.value.write().expect("state lock poisoned");
            *stored = value.clone();
        }
        self.signal.send(&value);
    }

    /// Connects a receiver and immediately replays the current value to it.
    ///
    /// If a receiver with the same id is already connected, it is replaced
    /// (and still receives the replay).
    pub fn connect(&self, receiver_id: impl Into<String>, callback: SignalReceiver<T>) {
        let current = self.get();
        callback(&current);
        self.signal.connect(receiver_id, callback);
    }

    /// Disconnects the receiver with the given id.
    pub fn disconnect(&self, receiver_id: &str) -> bool {
        self.signal.disconnect(receiver_id)
    }

    /// Returns the number of connected receivers.
    pub fn receiver_count(&self) -> usize {
        self.signal.receiver_count()
    }
}

impl<T: Clone + Default + 'static> Default for StateSignal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
