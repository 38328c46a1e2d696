//! Error types used by the registry and its listeners.
//!
//! - [`Error`]: every failure surfaced by the public API.
//! - [`ListenerError`]: what a callback returns when it fails.
//!
//! `Error` provides helper methods (`as_label`, `as_message`) for logging/metrics
//! and [`Error::is_invalid_argument`] to tell caller mistakes apart from
//! callback failures.

use thiserror::Error;

use crate::listeners::ListenerId;

/// Error returned by a listener callback.
///
/// Boxed so that callbacks can fail with any error type and use `?` freely.
/// The registry never inspects or rewraps it beyond attaching the event name.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for registry and listener operations.
pub type Result<T> = std::result::Result<T, Error>;

/// # Errors produced by the dispatcher.
///
/// `InvalidEventName` and `NegativeCallLimit` are argument errors raised
/// synchronously by the call that violates the contract. `Listener` carries a
/// callback failure out of [`Registry::emit`](crate::Registry::emit).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Event name is empty or contains characters outside `[A-Za-z0-9._]`.
    #[error("invalid event name {name:?}: expected letters, digits, '.' or '_'")]
    InvalidEventName {
        /// The rejected name.
        name: String,
    },

    /// A call limit below zero was requested.
    #[error("call limit must not be negative, got {limit}")]
    NegativeCallLimit {
        /// The rejected limit.
        limit: i64,
    },

    /// A listener callback failed during an emission.
    #[error("listener {listener} failed while handling '{event}': {source}")]
    Listener {
        /// Name of the event being emitted.
        event: String,
        /// Listener whose callback failed.
        listener: ListenerId,
        /// The callback's own error, untouched.
        #[source]
        source: ListenerError,
    },
}

impl Error {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use tidings::Error;
    ///
    /// let err = Error::NegativeCallLimit { limit: -1 };
    /// assert_eq!(err.as_label(), "negative_call_limit");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Error::InvalidEventName { .. } => "invalid_event_name",
            Error::NegativeCallLimit { .. } => "negative_call_limit",
            Error::Listener { .. } => "listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            Error::InvalidEventName { name } => format!("invalid event name: {name:?}"),
            Error::NegativeCallLimit { limit } => format!("negative call limit: {limit}"),
            Error::Listener {
                event,
                listener,
                source,
            } => format!("event={event} listener={listener} error: {source}"),
        }
    }

    /// True for errors caused by malformed input (bad name, negative limit).
    ///
    /// # Example
    /// ```
    /// use tidings::{Args, Registry};
    ///
    /// let registry: Registry<Args> = Registry::new();
    /// let err = registry.emit("no spaces allowed", &Args::new()).unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidEventName { .. } | Error::NegativeCallLimit { .. }
        )
    }

    /// Returns the callback's original error, if this is a listener failure.
    ///
    /// Use it to downcast back to the concrete error type the callback raised.
    pub fn into_listener_error(self) -> Option<ListenerError> {
        match self {
            Error::Listener { source, .. } => Some(source),
            _ => None,
        }
    }
}
