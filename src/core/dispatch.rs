//! # Dispatcher trait.
//!
//! [`Dispatch`] is the object-safe surface of a registry. Components that
//! only publish or subscribe take `&dyn Dispatch<A>` (or `Arc<dyn Dispatch<A>>`)
//! instead of a concrete [`Registry`], so tests and embedders can hand them an
//! isolated registry of their own.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use tidings::{Args, CallbackFn, CallbackRef, Dispatch, ListenerError, Priority, Registry};
//!
//! fn audit(dispatcher: &dyn Dispatch<Args>) -> tidings::Result<()> {
//!     let cb: CallbackRef<Args> = CallbackFn::arc("audit", |_: &Args| -> Result<(), ListenerError> { Ok(()) });
//!     dispatcher.register("user.deleted", cb, Priority::HIGH)?;
//!     dispatcher.emit("user.deleted", &Args::new())
//! }
//!
//! let registry: Arc<Registry> = Arc::new(Registry::new());
//! audit(&*registry).unwrap();
//! ```

use std::sync::Arc;

use crate::core::registry::Registry;
use crate::error::Result;
use crate::listeners::{CallbackRef, ListenerRef};
use crate::policies::Priority;

/// Register/emit/unregister/reset over payload type `A`.
pub trait Dispatch<A>: Send + Sync {
    /// See [`Registry::register`].
    fn register(
        &self,
        name: &str,
        callback: CallbackRef<A>,
        priority: Priority,
    ) -> Result<ListenerRef<A>>;

    /// See [`Registry::emit`].
    fn emit(&self, name: &str, args: &A) -> Result<()>;

    /// See [`Registry::unregister`].
    fn unregister(&self, name: &str) -> Result<bool>;

    /// See [`Registry::reset`].
    fn reset(&self) -> bool;
}

impl<A> Dispatch<A> for Registry<A> {
    fn register(
        &self,
        name: &str,
        callback: CallbackRef<A>,
        priority: Priority,
    ) -> Result<ListenerRef<A>> {
        Registry::register(self, name, callback, priority)
    }

    fn emit(&self, name: &str, args: &A) -> Result<()> {
        Registry::emit(self, name, args)
    }

    fn unregister(&self, name: &str) -> Result<bool> {
        Registry::unregister(self, name)
    }

    fn reset(&self) -> bool {
        Registry::reset(self)
    }
}

impl<A, T: Dispatch<A> + ?Sized> Dispatch<A> for Arc<T> {
    fn register(
        &self,
        name: &str,
        callback: CallbackRef<A>,
        priority: Priority,
    ) -> Result<ListenerRef<A>> {
        (**self).register(name, callback, priority)
    }

    fn emit(&self, name: &str, args: &A) -> Result<()> {
        (**self).emit(name, args)
    }

    fn unregister(&self, name: &str) -> Result<bool> {
        (**self).unregister(name)
    }

    fn reset(&self) -> bool {
        (**self).reset()
    }
}
