//! # Listener: one subscription and its invocation policy.
//!
//! A [`Listener`] pairs a [`Callback`] with a [`Priority`], a pause flag and a
//! call budget. The registry keeps one `Arc` per listener in the event's bucket
//! and hands the caller another one ([`ListenerRef`]), so `pause()` or
//! `set_call_limit()` on the caller's handle is seen by the next emission.
//!
//! ## State
//! ```text
//!            pause()                       invoke() while calls < limit
//!   active ───────────► paused        has-budget ───────────────────────► exhausted
//!          ◄───────────                          ◄───────────────────────
//!            resume()                        set_call_limit(higher)
//! ```
//! The two axes are independent. Pausing is enforced by the registry (an
//! emission stops at the first paused listener); the budget is enforced by
//! [`Listener::invoke`] itself.
//!
//! ## Rules
//! - Budget is consumed **before** the callback runs: a failing callback still
//!   counts as a call.
//! - An exhausted listener is skipped silently; it is not an error.
//! - Check-and-increment is atomic, so concurrent emissions never exceed the
//!   limit.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::error::{ListenerError, Result};
use crate::listeners::callback::CallbackRef;
use crate::policies::{CallLimit, IntoCallLimit, Priority};

/// Global sequence for listener ids.
static LISTENER_SEQ: AtomicU64 = AtomicU64::new(1);

/// Shared handle to a registered listener.
pub type ListenerRef<A> = Arc<Listener<A>>;

/// Process-unique listener identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(LISTENER_SEQ.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw id. Only useful for tests and log correlation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Outcome of [`Listener::invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The callback ran and returned `Ok`.
    Delivered,
    /// The call budget is used up; the callback did not run.
    Exhausted,
}

#[derive(Debug, Clone, Copy, Default)]
struct Budget {
    limit: CallLimit,
    calls: u64,
}

/// A callback plus its priority, pause flag and call budget.
pub struct Listener<A> {
    id: ListenerId,
    callback: CallbackRef<A>,
    priority: Priority,
    paused: AtomicBool,
    budget: Mutex<Budget>,
}

impl<A> Listener<A> {
    /// Creates an active, unlimited listener with a fresh id.
    pub fn new(callback: CallbackRef<A>, priority: impl Into<Priority>) -> Self {
        Self {
            id: ListenerId::next(),
            callback,
            priority: priority.into(),
            paused: AtomicBool::new(false),
            budget: Mutex::new(Budget::default()),
        }
    }

    /// Returns the listener id.
    #[inline]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns the priority fixed at construction.
    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the wrapped callback.
    pub fn callback(&self) -> &CallbackRef<A> {
        &self.callback
    }

    /// Returns the callback's name.
    pub fn name(&self) -> &str {
        self.callback.name()
    }

    /// Pauses the listener. Idempotent.
    ///
    /// While paused, every emission of the listener's event stops when it
    /// reaches this listener: neither it nor any listener after it runs.
    pub fn pause(&self) -> &Self {
        self.paused.store(true, Ordering::Release);
        self
    }

    /// Resumes a paused listener. Idempotent.
    pub fn resume(&self) -> &Self {
        self.paused.store(false, Ordering::Release);
        self
    }

    /// True while paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Sets how many calls the listener accepts over its lifetime.
    ///
    /// Accepts a [`CallLimit`], an integer or an `Option<i64>` (`None` means
    /// unlimited). The call count is left untouched, so a limit at or below
    /// the current count exhausts the listener immediately.
    ///
    /// # Errors
    /// [`Error::NegativeCallLimit`](crate::Error::NegativeCallLimit) for a
    /// negative value; the previous limit stays in place.
    ///
    /// # Example
    /// ```
    /// use tidings::{CallLimit, Registry};
    ///
    /// let registry: Registry<()> = Registry::new();
    /// let listener = registry.on("tick", |_| Ok(())).unwrap();
    ///
    /// listener.set_call_limit(CallLimit::ONCE).unwrap();
    /// assert!(listener.set_call_limit(-1).is_err());
    /// assert_eq!(listener.call_limit(), CallLimit::ONCE);
    /// ```
    pub fn set_call_limit(&self, limit: impl IntoCallLimit) -> Result<&Self> {
        let limit = limit.into_call_limit()?;
        self.budget.lock().limit = limit;
        Ok(self)
    }

    /// Returns the configured ceiling on deliveries, as last passed to
    /// [`Listener::set_call_limit`].
    ///
    /// This is the fixed cap, not what is left of it; see
    /// [`Listener::remaining_calls`] for that.
    pub fn call_limit(&self) -> CallLimit {
        self.budget.lock().limit
    }

    /// Number of times the callback has been started.
    pub fn call_count(&self) -> u64 {
        self.budget.lock().calls
    }

    /// Calls left before exhaustion (`call_limit - call_count`, floored at
    /// zero), or `None` when unlimited.
    ///
    /// Derived from the ceiling and the count; it shrinks with every delivery
    /// while [`Listener::call_limit`] stays put.
    pub fn remaining_calls(&self) -> Option<u64> {
        let budget = *self.budget.lock();
        budget
            .limit
            .get()
            .map(|limit| limit.saturating_sub(budget.calls))
    }

    /// True if the budget is used up.
    pub fn is_exhausted(&self) -> bool {
        let budget = *self.budget.lock();
        !budget.limit.allows(budget.calls)
    }

    /// Runs the callback if the budget allows it.
    ///
    /// Does **not** look at the pause flag; pausing is a property of the
    /// event's dispatch sequence and is handled by the registry.
    ///
    /// Returns `Ok(Invocation::Exhausted)` without touching the count when the
    /// budget is used up. Otherwise the count is incremented first and the
    /// callback's result is returned unmodified.
    pub fn invoke(&self, args: &A) -> std::result::Result<Invocation, ListenerError> {
        {
            let mut budget = self.budget.lock();
            if !budget.limit.allows(budget.calls) {
                return Ok(Invocation::Exhausted);
            }
            budget.calls += 1;
        }

        self.callback.call(args)?;
        Ok(Invocation::Delivered)
    }
}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = *self.budget.lock();
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("priority", &self.priority)
            .field("paused", &self.is_paused())
            .field("limit", &budget.limit)
            .field("calls", &budget.calls)
            .finish()
    }
}
