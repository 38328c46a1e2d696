//! # tidings
//!
//! **Tidings** is a small in-process event dispatcher for Rust.
//!
//! Callbacks subscribe to named events with a priority; emitting an event
//! calls them synchronously, highest priority first. Each subscription
//! returns a [`Listener`] handle that can pause the rest of an emission or
//! cap how many times its callback runs.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   register("user.created", cb, 100)      register("cache.evict", cb, 0)
//!             │                                      │
//!             ▼                                      ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry<A>                                                      │
//! │  RwLock<HashMap<EventName, Bucket>>                               │
//! │    "user.created" → [L(p=100), L(p=20), L(p=0)]                   │
//! │    "cache.evict"  → [L(p=0)]                                      │
//! └──────┬────────────────────────────────────────────────────────────┘
//!        │ emit("user.created", &args)
//!        ▼
//!  snapshot (Arc clones, lock released)
//!        │
//!        ├─► L(p=100): active  ──► count += 1 ──► callback(&args)
//!        ├─► L(p=20):  paused  ──► emission stops here
//!        └─► L(p=0):   not reached
//! ```
//!
//! ### Listener state
//! ```text
//! Listener
//!   ├─ priority   fixed at registration
//!   ├─ paused     AtomicBool; a paused listener ends the emission
//!   └─ budget     { limit: Unlimited | Times(n), calls }
//!                   calls < n  → run, calls += 1
//!                   calls >= n → skipped, emission continues
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Registry**      | Register, emit, unregister and reset named events.           | [`Registry`], [`Dispatch`]                 |
//! | **Listeners**     | Handles with pause/resume and call budgets.                  | [`Listener`], [`ListenerRef`]              |
//! | **Callbacks**     | Closures or custom types invoked on emission.                | [`Callback`], [`CallbackFn`]               |
//! | **Policies**      | Priority, call limits and failure handling.                  | [`Priority`], [`CallLimit`], [`FailurePolicy`] |
//! | **Payloads**      | Typed payloads or a positional, type-erased list.            | [`Args`], [`args!`]                        |
//! | **Errors**        | Typed errors for bad arguments and failing callbacks.        | [`Error`], [`ListenerError`]               |
//! | **Configuration** | Registry settings and builder.                               | [`RegistryConfig`], [`RegistryBuilder`]    |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] callback _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use tidings::{args, Args, CallLimit, Registry};
//!
//! fn main() -> tidings::Result<()> {
//!     let registry: Registry = Registry::new();
//!
//!     // Highest priority runs first.
//!     registry.on_with_priority("user.created", |a: &Args| {
//!         let name: &String = a.arg(0)?;
//!         println!("welcome, {name}");
//!         Ok(())
//!     }, 100)?;
//!
//!     // Runs for the first emission only.
//!     let audit = registry.on("user.created", |_| {
//!         println!("first user created");
//!         Ok(())
//!     })?;
//!     audit.set_call_limit(CallLimit::ONCE)?;
//!
//!     registry.emit("user.created", &args!["ada".to_string()])?;
//!     registry.emit("user.created", &args!["grace".to_string()])?;
//!     assert_eq!(audit.call_count(), 1);
//!
//!     // Unknown events are not an error.
//!     registry.emit("user.deleted", &Args::new())?;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod listeners;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{Config as RegistryConfig, Dispatch, Registry, RegistryBuilder};
pub use error::{Error, ListenerError, Result};
pub use events::{ArgError, Args, EventName};
pub use listeners::{
    Callback, CallbackFn, CallbackRef, Invocation, Listener, ListenerId, ListenerRef,
};
pub use policies::{CallLimit, FailurePolicy, IntoCallLimit, Priority};

// Optional: expose a simple built-in logging callback (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
