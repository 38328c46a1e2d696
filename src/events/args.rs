//! # Positional argument lists.
//!
//! [`Args`] is the default payload type of a [`Registry`](crate::Registry): an
//! ordered list of values of any `'static` type. It lets one event carry a
//! different number of arguments than another without a dedicated struct per
//! event.
//!
//! Callbacks read arguments back by position and type:
//!
//! ```rust
//! use tidings::{args, Args, ListenerError};
//!
//! let args: Args = args!["Ada", "Lovelace", 36_u32];
//!
//! let read = |a: &Args| -> Result<String, ListenerError> {
//!     let first: &&str = a.arg(0)?;
//!     let age: &u32 = a.arg(2)?;
//!     Ok(format!("{first} ({age})"))
//! };
//! assert_eq!(read(&args).unwrap(), "Ada (36)");
//! ```
//!
//! When every emission of an event has the same shape, a plain struct or tuple
//! as the registry's payload type is usually the better choice.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Failure to read an argument from [`Args`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Fewer arguments were emitted than the callback expects.
    #[error("missing argument #{index} (emitted {len})")]
    Missing {
        /// Requested position.
        index: usize,
        /// Number of arguments actually present.
        len: usize,
    },

    /// The argument exists but has another type.
    #[error("argument #{index} is not a {expected}")]
    TypeMismatch {
        /// Requested position.
        index: usize,
        /// Type name the callback asked for.
        expected: &'static str,
    },
}

type Value = Arc<dyn Any + Send + Sync>;

/// Ordered, type-erased argument list.
///
/// Cloning is cheap: values are reference-counted, never copied.
#[derive(Clone, Default)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` and returns the list (builder style).
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends `value`.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Arc::new(value));
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns argument `index` if it exists and has type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values.get(index)?.downcast_ref::<T>()
    }

    /// Like [`Args::get`], but explains what went wrong.
    ///
    /// `ArgError` converts into [`ListenerError`](crate::ListenerError), so
    /// callbacks can simply write `args.arg::<T>(0)?`.
    pub fn arg<T: Any>(&self, index: usize) -> Result<&T, ArgError> {
        let value = self.values.get(index).ok_or(ArgError::Missing {
            index,
            len: self.values.len(),
        })?;
        value
            .downcast_ref::<T>()
            .ok_or(ArgError::TypeMismatch {
                index,
                expected: type_name::<T>(),
            })
    }

    /// Iterates over the raw values in order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Any + Send + Sync)> {
        self.values.iter().map(|v| &**v)
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args").field("len", &self.values.len()).finish()
    }
}

/// Builds an [`Args`] from a list of expressions.
///
/// ```rust
/// use tidings::args;
///
/// let empty = args![];
/// assert!(empty.is_empty());
///
/// let three = args![1_i32, "two", 3.0_f64];
/// assert_eq!(three.len(), 3);
/// assert_eq!(three.get::<&str>(1), Some(&"two"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new()$(.with($value))+
    };
}
