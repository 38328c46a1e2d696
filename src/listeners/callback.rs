//! # Callback abstraction and function-backed implementation.
//!
//! [`Callback`] is the invocable capability a listener wraps. [`CallbackFn`]
//! adapts any `Fn(&A) -> Result<(), ListenerError>` closure and gives it a
//! name for logs. The shared handle type is [`CallbackRef`].
//!
//! Callbacks receive the emitted payload by reference and run on the
//! emitter's thread. A callback that needs state across calls keeps it
//! behind its own synchronization (`Mutex`, atomics); the listener never
//! hands out `&mut`.
//!
//! ## Example
//! ```rust
//! use tidings::{Args, Callback, CallbackFn, CallbackRef, ListenerError};
//!
//! let greet: CallbackRef<Args> = CallbackFn::arc("greet", |args: &Args| -> Result<(), ListenerError> {
//!     let who: &&str = args.arg(0)?;
//!     println!("hello {who}");
//!     Ok(())
//! });
//!
//! assert_eq!(greet.name(), "greet");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ListenerError;

/// Shared handle to a callback.
pub type CallbackRef<A> = Arc<dyn Callback<A>>;

/// # Synchronous event handler.
///
/// Implement it directly for handlers with their own state, or wrap a
/// closure in [`CallbackFn`].
///
/// # Example
/// ```
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use tidings::{Callback, ListenerError};
///
/// struct Counter(AtomicU64);
///
/// impl Callback<u64> for Counter {
///     fn call(&self, amount: &u64) -> Result<(), ListenerError> {
///         self.0.fetch_add(*amount, Ordering::Relaxed);
///         Ok(())
///     }
///
///     fn name(&self) -> &str { "counter" }
/// }
/// ```
pub trait Callback<A>: Send + Sync {
    /// Handles one delivery.
    ///
    /// An error is handed to the emitter as-is; see
    /// [`FailurePolicy`](crate::FailurePolicy) for what happens to the
    /// listeners after this one.
    fn call(&self, args: &A) -> Result<(), ListenerError>;

    /// Returns the callback name used in logs and `Debug` output.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Closure-backed callback.
pub struct CallbackFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> CallbackFn<F> {
    /// Creates a new function-backed callback.
    ///
    /// Prefer [`CallbackFn::arc`] when you immediately need a [`CallbackRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the callback and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<A, F> Callback<A> for CallbackFn<F>
where
    F: Fn(&A) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    fn call(&self, args: &A) -> Result<(), ListenerError> {
        (self.f)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for CallbackFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackFn")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_fn_forwards_args_and_errors() {
        let cb: CallbackRef<i32> =
            CallbackFn::arc("even_only", |n: &i32| -> Result<(), ListenerError> {
                if n % 2 == 0 {
                    Ok(())
                } else {
                    Err(format!("{n} is odd").into())
                }
            });
        assert_eq!(cb.name(), "even_only");
        assert!(cb.call(&4).is_ok());
        assert_eq!(cb.call(&3).unwrap_err().to_string(), "3 is odd");
    }

    #[test]
    fn test_default_name_is_type_name() {
        struct Quiet;
        impl Callback<()> for Quiet {
            fn call(&self, _: &()) -> Result<(), ListenerError> {
                Ok(())
            }
        }
        assert!(Quiet.name().ends_with("Quiet"));
    }
}
