//! # Tracing callback for debugging and demos.
//!
//! [`LogWriter`] records every delivery it receives as a `tracing` event at
//! `INFO` level, with the payload rendered through `Debug`:
//!
//! ```text
//! INFO tidings::listeners::log: delivered callback="audit" args=Args { len: 2 }
//! ```
//!
//! Register it at [`Priority::MAX`](crate::Priority::MAX) to trace every
//! emission of an event before any other listener runs.
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use tidings::{Args, LogWriter, Priority, Registry};
//! let registry: Registry<Args> = Registry::new();
//! registry
//!     .register("user.created", Arc::new(LogWriter::new("audit")), Priority::MAX)
//!     .unwrap();
//! ```

use std::borrow::Cow;
use std::fmt::Debug;

use crate::error::ListenerError;
use crate::listeners::Callback;

/// Callback that logs each delivery through `tracing`.
///
/// Enabled via the `logging` feature. Never fails.
#[derive(Debug, Clone)]
pub struct LogWriter {
    name: Cow<'static, str>,
}

impl LogWriter {
    /// Creates a writer whose deliveries are tagged with `name`.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new("log")
    }
}

impl<A: Debug> Callback<A> for LogWriter {
    fn call(&self, args: &A) -> Result<(), ListenerError> {
        tracing::info!(callback = %self.name, ?args, "delivered");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Priority, Registry};

    #[test]
    fn test_log_writer_never_fails() {
        let registry: Registry<(u8, &'static str)> = Registry::new();
        let listener = registry
            .register("audit.entry", Arc::new(LogWriter::new("audit")), Priority::MAX)
            .unwrap();
        registry.emit("audit.entry", &(1, "one")).unwrap();
        registry.emit("audit.entry", &(2, "two")).unwrap();
        assert_eq!(listener.call_count(), 2);
        assert_eq!(listener.name(), "audit");
    }
}
