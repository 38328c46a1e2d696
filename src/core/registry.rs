//! # Registry - event buckets and the dispatch loop.
//!
//! The registry owns one priority-ordered [`Bucket`] per event name and
//! implements the four lifecycle operations:
//! - `register` → validate name, create bucket if absent, insert by priority
//! - `emit` → validate name, snapshot bucket, run listeners in order
//! - `unregister` → drop a whole bucket
//! - `reset` → drop every bucket
//!
//! ## Architecture
//! ```text
//! Registry
//!   RwLock<HashMap<EventName, Bucket>>
//!     "user.created" → [L(p=100), L(p=20), L(p=0)]
//!     "cache.evict"  → [L(p=0)]
//!
//! emit("user.created", &args)
//!   ├─► read lock → clone Arcs → unlock
//!   └─► for L in snapshot:
//!         ├─ L.is_paused()  → stop emission
//!         └─ L.invoke(&args)
//!               ├─ Delivered / Exhausted → next
//!               └─ Err(e) → FailurePolicy::{Abort | Continue}
//! ```
//!
//! ## Rules
//! - Unknown event names are not errors: `emit` is a no-op, `unregister` returns `false`.
//! - Malformed names fail every operation that takes one.
//! - No lock is held while callbacks run: callbacks may register, emit,
//!   unregister or reset re-entrantly. Such changes apply from the next emission.
//! - Listeners are never removed individually; use `unregister` or call limits.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::core::Config;
use crate::core::bucket::Bucket;
use crate::core::builder::RegistryBuilder;
use crate::error::{Error, ListenerError, Result};
use crate::events::{Args, EventName, validate_name};
use crate::listeners::{CallbackFn, CallbackRef, Invocation, Listener, ListenerRef};
use crate::policies::{FailurePolicy, Priority};

/// Event name → ordered listeners.
///
/// `A` is the payload type handed to every callback; it defaults to the
/// positional [`Args`] list.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use tidings::{Args, Registry};
///
/// let registry: Registry<Args> = Registry::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// for p in [10, 0, 100, 20] {
///     let seen = Arc::clone(&seen);
///     registry
///         .on_with_priority("event.test.priority", move |_| {
///             seen.lock().unwrap().push(p);
///             Ok(())
///         }, p)
///         .unwrap();
/// }
///
/// registry.emit("event.test.priority", &Args::new()).unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec![100, 20, 10, 0]);
/// ```
pub struct Registry<A = Args> {
    buckets: RwLock<HashMap<EventName, Bucket<A>>>,
    cfg: Config,
}

impl<A> Registry<A> {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty registry with `cfg`.
    pub fn with_config(cfg: Config) -> Self {
        Self {
            buckets: RwLock::new(HashMap::new()),
            cfg,
        }
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Registers `callback` for `name` at `priority` and returns its handle.
    ///
    /// The listener is placed after every listener of greater or equal
    /// priority, so equal-priority listeners run in registration order.
    ///
    /// # Errors
    /// [`Error::InvalidEventName`] if `name` is empty or contains characters
    /// outside `[A-Za-z0-9._]`.
    pub fn register(
        &self,
        name: &str,
        callback: CallbackRef<A>,
        priority: impl Into<Priority>,
    ) -> Result<ListenerRef<A>> {
        let event = EventName::new(name)?;
        let listener = Arc::new(Listener::new(callback, priority));

        let mut buckets = self.buckets.write();
        let bucket = buckets
            .entry(event)
            .or_insert_with(|| Bucket::with_capacity(self.cfg.bucket_capacity()));
        let position = bucket.insert(Arc::clone(&listener));
        let len = bucket.len();
        drop(buckets);

        debug!(
            event = name,
            listener = %listener.id(),
            callback = listener.name(),
            priority = %listener.priority(),
            position,
            bucket_len = len,
            "registered listener"
        );
        Ok(listener)
    }

    /// Registers a closure at [`Priority::NORMAL`].
    pub fn on<F>(&self, name: &str, f: F) -> Result<ListenerRef<A>>
    where
        F: Fn(&A) -> std::result::Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.on_with_priority(name, f, Priority::NORMAL)
    }

    /// Registers a closure at `priority`.
    ///
    /// The callback is named after the event it was registered for.
    pub fn on_with_priority<F>(
        &self,
        name: &str,
        f: F,
        priority: impl Into<Priority>,
    ) -> Result<ListenerRef<A>>
    where
        F: Fn(&A) -> std::result::Result<(), ListenerError> + Send + Sync + 'static,
    {
        let callback: CallbackRef<A> = CallbackFn::arc(name.to_string(), f);
        self.register(name, callback, priority)
    }

    /// Dispatches `args` to the listeners of `name`.
    ///
    /// Listeners run in priority order on the caller's thread. The emission
    /// stops at the first paused listener; listeners after it do not run even
    /// if they are active. Exhausted listeners are skipped silently.
    ///
    /// # Errors
    /// - [`Error::InvalidEventName`] for a malformed `name`.
    /// - [`Error::Listener`] when a callback fails, following the configured
    ///   [`FailurePolicy`].
    pub fn emit(&self, name: &str, args: &A) -> Result<()> {
        validate_name(name)?;

        let snapshot = match self.buckets.read().get(name) {
            Some(bucket) => bucket.snapshot(),
            None => {
                trace!(event = name, "emit without listeners");
                return Ok(());
            }
        };

        trace!(event = name, listeners = snapshot.len(), "emitting");
        self.dispatch(name, &snapshot, args)
    }

    fn dispatch(&self, name: &str, listeners: &[ListenerRef<A>], args: &A) -> Result<()> {
        let mut first_failure: Option<Error> = None;

        for listener in listeners {
            if listener.is_paused() {
                trace!(
                    event = name,
                    listener = %listener.id(),
                    "dispatch halted at paused listener"
                );
                break;
            }

            match listener.invoke(args) {
                Ok(Invocation::Delivered) => {
                    trace!(event = name, listener = %listener.id(), "delivered");
                }
                Ok(Invocation::Exhausted) => {
                    trace!(
                        event = name,
                        listener = %listener.id(),
                        "call budget exhausted; skipped"
                    );
                }
                Err(source) => {
                    let err = Error::Listener {
                        event: name.to_string(),
                        listener: listener.id(),
                        source,
                    };
                    match self.cfg.failure {
                        FailurePolicy::Abort => return Err(err),
                        FailurePolicy::Continue => {
                            warn!(
                                event = name,
                                listener = %listener.id(),
                                callback = listener.name(),
                                label = err.as_label(),
                                error = %err.as_message(),
                                "listener failed; continuing emission"
                            );
                            first_failure.get_or_insert(err);
                        }
                    }
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Removes every listener of `name`.
    ///
    /// Returns `true` if the event had listeners, `false` otherwise.
    ///
    /// # Errors
    /// [`Error::InvalidEventName`] for a malformed `name`.
    pub fn unregister(&self, name: &str) -> Result<bool> {
        validate_name(name)?;
        let removed = self.buckets.write().remove(name);

        match removed {
            Some(bucket) => {
                debug!(event = name, listeners = bucket.len(), "unregistered event");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every listener of every event. Always returns `true`.
    pub fn reset(&self) -> bool {
        let cleared = {
            let mut buckets = self.buckets.write();
            let n = buckets.len();
            buckets.clear();
            n
        };
        debug!(events = cleared, "registry reset");
        true
    }

    /// Number of listeners registered for `name` (paused and exhausted included).
    pub fn listener_count(&self, name: &str) -> Result<usize> {
        validate_name(name)?;
        Ok(self.buckets.read().get(name).map_or(0, Bucket::len))
    }

    /// True if `name` has at least one listener.
    pub fn has_listeners(&self, name: &str) -> Result<bool> {
        Ok(self.listener_count(name)? > 0)
    }

    /// Handles of the listeners of `name`, in dispatch order.
    pub fn listeners(&self, name: &str) -> Result<Vec<ListenerRef<A>>> {
        validate_name(name)?;
        Ok(self
            .buckets
            .read()
            .get(name)
            .map(Bucket::snapshot)
            .unwrap_or_default())
    }

    /// Returns sorted list of event names with listeners.
    pub fn event_names(&self) -> Vec<String> {
        let buckets = self.buckets.read();
        let mut names: Vec<String> = buckets.keys().map(|n| n.as_str().to_string()).collect();
        names.sort_unstable();
        names
    }

    /// True if no event has listeners.
    pub fn is_empty(&self) -> bool {
        self.buckets.read().is_empty()
    }
}

impl Registry {
    /// Returns a builder seeded with `cfg`.
    ///
    /// The payload type is chosen at [`RegistryBuilder::build`].
    pub fn builder(cfg: Config) -> RegistryBuilder {
        RegistryBuilder::new(cfg)
    }
}

impl<A> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for Registry<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.event_names())
            .field("config", &self.cfg)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;
    use crate::args;
    use crate::policies::CallLimit;

    type Log = Arc<Mutex<Vec<String>>>;

    fn recorder(
        registry: &Registry<Args>,
        name: &str,
        tag: &'static str,
        priority: i64,
        log: &Log,
    ) -> ListenerRef<Args> {
        let log = Arc::clone(log);
        registry
            .on_with_priority(
                name,
                move |_| {
                    log.lock().push(tag.to_string());
                    Ok(())
                },
                priority,
            )
            .unwrap()
    }

    #[test]
    fn test_register_returns_distinct_handles() {
        let registry: Registry = Registry::new();
        let a = registry.on("event.test", |_| Ok(())).unwrap();
        let b = registry.on("event.test", |_| Ok(())).unwrap();
        assert_ne!(a.id(), b.id());
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.listener_count("event.test").unwrap(), 2);
    }

    #[test]
    fn test_handle_is_shared_with_bucket() {
        let registry: Registry = Registry::new();
        let handle = registry.on("shared", |_| Ok(())).unwrap();
        let stored = registry.listeners("shared").unwrap();
        assert!(Arc::ptr_eq(&handle, &stored[0]));
    }

    #[test]
    fn test_invalid_names_rejected_everywhere() {
        let registry: Registry = Registry::new();
        for bad in ["", "with space", "dash-ed", "star*"] {
            assert!(registry.on(bad, |_| Ok(())).unwrap_err().is_invalid_argument());
            assert!(
                registry
                    .on_with_priority(bad, |_| Ok(()), Priority::HIGH)
                    .unwrap_err()
                    .is_invalid_argument()
            );
            assert!(registry.emit(bad, &args![]).unwrap_err().is_invalid_argument());
            assert!(registry.unregister(bad).unwrap_err().is_invalid_argument());
            assert!(registry.listener_count(bad).is_err());
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_emit_unknown_name_is_noop() {
        let registry: Registry = Registry::new();
        registry.emit("nobody.listens", &args![1]).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_priority_order() {
        let registry = Registry::new();
        let log: Log = Default::default();
        recorder(&registry, "p", "10", 10, &log);
        recorder(&registry, "p", "0", 0, &log);
        recorder(&registry, "p", "100", 100, &log);
        recorder(&registry, "p", "20", 20, &log);

        registry.emit("p", &args![]).unwrap();
        assert_eq!(*log.lock(), vec!["100", "20", "10", "0"]);
    }

    #[test]
    fn test_paused_listener_halts_rest_of_emission() {
        let registry = Registry::new();
        let log: Log = Default::default();
        recorder(&registry, "halt", "high", 100, &log);
        let middle = recorder(&registry, "halt", "middle", 50, &log);
        recorder(&registry, "halt", "low", 0, &log);

        middle.pause();
        registry.emit("halt", &args![]).unwrap();
        assert_eq!(*log.lock(), vec!["high"]);

        middle.resume();
        log.lock().clear();
        registry.emit("halt", &args![]).unwrap();
        assert_eq!(*log.lock(), vec!["high", "middle", "low"]);
    }

    #[test]
    fn test_exhausted_listener_does_not_halt() {
        let registry = Registry::new();
        let log: Log = Default::default();
        let first = recorder(&registry, "once", "first", 10, &log);
        recorder(&registry, "once", "second", 0, &log);
        first.set_call_limit(CallLimit::ONCE).unwrap();

        registry.emit("once", &args![]).unwrap();
        registry.emit("once", &args![]).unwrap();
        assert_eq!(*log.lock(), vec!["first", "second", "second"]);
    }

    #[test]
    fn test_abort_policy_stops_after_failure() {
        let registry: Registry = Registry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        registry
            .on_with_priority("fail", |_| Err("first failed".into()), 10)
            .unwrap();
        let h = Arc::clone(&hits);
        registry
            .on("fail", move |_| {
                h.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        let err = registry.emit("fail", &args![]).unwrap_err();
        assert_eq!(err.as_label(), "listener_failed");
        assert_eq!(err.into_listener_error().unwrap().to_string(), "first failed");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_continue_policy_runs_everyone_and_returns_first_error() {
        let registry: Registry = Registry::builder(Config::default())
            .failure_policy(FailurePolicy::Continue)
            .build();
        let hits = Arc::new(AtomicUsize::new(0));
        registry.on_with_priority("fail", |_| Err("one".into()), 30).unwrap();
        registry.on_with_priority("fail", |_| Err("two".into()), 20).unwrap();
        let h = Arc::clone(&hits);
        registry
            .on("fail", move |_| {
                h.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        let err = registry.emit("fail", &args![]).unwrap_err();
        assert_eq!(err.into_listener_error().unwrap().to_string(), "one");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregister_and_reset() {
        let registry = Registry::new();
        let log: Log = Default::default();
        recorder(&registry, "a", "a", 0, &log);
        recorder(&registry, "b", "b", 0, &log);
        assert_eq!(registry.event_names(), vec!["a", "b"]);

        assert!(registry.unregister("a").unwrap());
        assert!(!registry.unregister("a").unwrap());
        registry.emit("a", &args![]).unwrap();
        assert!(log.lock().is_empty());

        assert!(registry.reset());
        assert!(registry.is_empty());
        registry.emit("b", &args![]).unwrap();
        assert!(log.lock().is_empty());
        assert!(registry.reset());
    }

    #[test]
    fn test_reentrant_registration_applies_to_next_emission() {
        let registry: Arc<Registry<()>> = Arc::new(Registry::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let weak = Arc::downgrade(&registry);
        let h = Arc::clone(&hits);
        registry
            .on("grow", move |_| {
                if let Some(registry) = weak.upgrade() {
                    let h = Arc::clone(&h);
                    registry.on("grow", move |_| {
                        h.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    })?;
                }
                Ok(())
            })
            .unwrap()
            .set_call_limit(CallLimit::ONCE)
            .unwrap();

        registry.emit("grow", &()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(registry.listener_count("grow").unwrap(), 2);

        registry.emit("grow", &()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_borrowed_payloads() {
        let line = String::from("borrowed payload");
        let registry: Registry<&str> = Registry::new();
        let seen: Arc<Mutex<Vec<String>>> = Default::default();
        let s = Arc::clone(&seen);
        registry
            .on("borrowed", move |text| {
                s.lock().push(text.to_string());
                Ok(())
            })
            .unwrap();

        registry.emit("borrowed", &line.as_str()).unwrap();
        assert_eq!(*seen.lock(), vec![line.clone()]);
    }

    #[test]
    fn test_unregister_during_emit_finishes_snapshot() {
        let registry: Arc<Registry<()>> = Arc::new(Registry::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let weak = Arc::downgrade(&registry);
        registry
            .on_with_priority(
                "drain",
                move |_| {
                    if let Some(registry) = weak.upgrade() {
                        registry.unregister("drain")?;
                    }
                    Ok(())
                },
                10,
            )
            .unwrap();
        let h = Arc::clone(&hits);
        registry
            .on("drain", move |_| {
                h.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        registry.emit("drain", &()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!registry.has_listeners("drain").unwrap());

        registry.emit("drain", &()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_lists_events() {
        let registry: Registry<()> = Registry::new();
        registry.on("z.last", |_| Ok(())).unwrap();
        registry.on("a.first", |_| Ok(())).unwrap();
        let out = format!("{registry:?}");
        assert!(out.contains(r#"["a.first", "z.last"]"#), "{out}");
    }
}
