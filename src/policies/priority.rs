//! # Listener priorities.
//!
//! Listeners of one event run in **descending** priority order. Listeners with
//! equal priority run in registration order.
//!
//! ```text
//! Priority::MAX     i64::MAX   runs first
//! Priority::HIGH         100
//! Priority::NORMAL         0   default
//! Priority::LOW         -100
//! Priority::MIN     i64::MIN   runs last
//! ```
//!
//! The named levels are conventions only; any `i64` is a valid priority.

use std::fmt;

/// Signed dispatch priority; higher runs earlier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(i64);

impl Priority {
    /// Largest representable priority.
    pub const MAX: Priority = Priority(i64::MAX);
    /// Conventional "run early" level.
    pub const HIGH: Priority = Priority(100);
    /// Default level.
    pub const NORMAL: Priority = Priority(0);
    /// Conventional "run late" level.
    pub const LOW: Priority = Priority(-100);
    /// Smallest representable priority.
    pub const MIN: Priority = Priority(i64::MIN);

    /// Creates a priority from a raw value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Priority> for i64 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
