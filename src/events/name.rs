//! # Validated event names.
//!
//! An [`EventName`] is the key of a listener bucket. It is non-empty and made
//! only of ASCII letters, digits, `.` and `_`:
//!
//! ```text
//! user.created      ok
//! job_42.done       ok
//! ""                rejected (empty)
//! user created      rejected (space)
//! user:*            rejected (':' and '*')
//! ```
//!
//! Validation happens once, at construction. Dots carry no meaning to the
//! dispatcher: `user.created` and `user` are unrelated buckets.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A validated event name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventName(String);

impl EventName {
    /// Validates `name` and wraps it.
    ///
    /// # Example
    /// ```
    /// use tidings::EventName;
    ///
    /// assert!(EventName::new("order.paid").is_ok());
    /// assert!(EventName::new("order paid").is_err());
    /// assert!(EventName::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Checks `name` without allocating.
pub(crate) fn validate(name: &str) -> Result<()> {
    if is_valid(name) {
        Ok(())
    } else {
        Err(Error::InvalidEventName {
            name: name.to_string(),
        })
    }
}

#[inline]
fn is_valid(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_')
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for EventName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for EventName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for EventName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
