//! Priority-ordered listener sequence for one event.

use std::sync::Arc;

#[cfg(test)]
use crate::listeners::ListenerId;
use crate::listeners::ListenerRef;

/// Listeners of one event, highest priority first, ties in registration order.
pub(crate) struct Bucket<A> {
    listeners: Vec<ListenerRef<A>>,
}

impl<A> Bucket<A> {
    pub(crate) fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            listeners: capacity.map_or_else(Vec::new, Vec::with_capacity),
        }
    }

    /// Inserts after every listener of greater or equal priority.
    ///
    /// Same order as append + stable sort by descending priority, without
    /// re-sorting the whole bucket.
    pub(crate) fn insert(&mut self, listener: ListenerRef<A>) -> usize {
        let priority = listener.priority();
        let at = self
            .listeners
            .partition_point(|existing| existing.priority() >= priority);
        self.listeners.insert(at, listener);
        at
    }

    /// Clones the handles in dispatch order.
    pub(crate) fn snapshot(&self) -> Vec<ListenerRef<A>> {
        self.listeners.iter().map(Arc::clone).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    #[cfg(test)]
    pub(crate) fn ids(&self) -> impl Iterator<Item = ListenerId> + '_ {
        self.listeners.iter().map(|l| l.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenerError;
    use crate::listeners::{CallbackFn, CallbackRef, Listener};
    use crate::policies::Priority;

    fn listener(priority: i64) -> ListenerRef<()> {
        let cb: CallbackRef<()> =
            CallbackFn::arc("noop", |_: &()| -> Result<(), ListenerError> { Ok(()) });
        Arc::new(Listener::new(cb, priority))
    }

    fn priorities(bucket: &Bucket<()>) -> Vec<i64> {
        bucket.snapshot().iter().map(|l| l.priority().get()).collect()
    }

    #[test]
    fn test_insert_orders_by_descending_priority() {
        let mut bucket = Bucket::with_capacity(None);
        for p in [10, 0, 100, 20] {
            bucket.insert(listener(p));
        }
        assert_eq!(priorities(&bucket), vec![100, 20, 10, 0]);
        assert_eq!(bucket.len(), 4);
    }

    #[test]
    fn test_equal_priorities_keep_registration_order() {
        let mut bucket = Bucket::with_capacity(Some(8));
        let first = listener(5);
        let second = listener(5);
        let high = listener(9);
        let third = listener(5);
        let expected = [high.id(), first.id(), second.id(), third.id()];

        assert_eq!(bucket.insert(first), 0);
        assert_eq!(bucket.insert(second), 1);
        assert_eq!(bucket.insert(high), 0);
        assert_eq!(bucket.insert(third), 3);

        assert_eq!(bucket.ids().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_extreme_priorities() {
        let mut bucket = Bucket::with_capacity(None);
        bucket.insert(listener(Priority::MIN.get()));
        bucket.insert(listener(Priority::NORMAL.get()));
        bucket.insert(listener(Priority::MAX.get()));
        assert_eq!(priorities(&bucket), vec![i64::MAX, 0, i64::MIN]);
    }
}
