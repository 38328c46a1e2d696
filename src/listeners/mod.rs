//! # Listeners and the callbacks they wrap.
//!
//! ## Architecture
//! ```text
//! Registry::emit(name, &args)
//!     │
//!     ▼
//! bucket: [Listener(p=100), Listener(p=20), Listener(p=0)]
//!              │
//!              ├─ paused?  ──► stop the emission here
//!              ├─ budget?  ──► exhausted: skip silently
//!              └─ count += 1 ──► Callback::call(&args)
//! ```
//!
//! ## Contents
//! - [`Callback`] trait for handlers, [`CallbackFn`] closure adapter,
//!   [`CallbackRef`] shared handle
//! - [`Listener`] callback + priority + pause flag + call budget,
//!   [`ListenerRef`] shared handle returned by registration
//! - [`ListenerId`], [`Invocation`]
//! - `LogWriter` tracing callback (feature `logging`)

mod callback;
mod listener;
#[cfg(feature = "logging")]
mod log;

pub use callback::{Callback, CallbackFn, CallbackRef};
pub use listener::{Invocation, Listener, ListenerId, ListenerRef};
#[cfg(feature = "logging")]
pub use log::LogWriter;
