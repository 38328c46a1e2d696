//! # Call limits.
//!
//! [`CallLimit`] caps how many emissions actually run a listener's callback.
//!
//! ```text
//! CallLimit::UNLIMITED   runs on every emission (default)
//! CallLimit::NEVER       registered, never runs (Times(0))
//! CallLimit::ONCE        runs on the first emission only (Times(1))
//! CallLimit::Times(n)    runs on the first n emissions
//! ```
//!
//! The limit is compared against the listener's call count, which is never
//! reset: lowering the limit below the count exhausts the listener, raising
//! it above the count revives it.
//!
//! Signed inputs go through [`IntoCallLimit`], which rejects negatives with
//! [`Error::NegativeCallLimit`].

use crate::error::{Error, Result};

/// Cap on the number of deliveries a listener accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallLimit {
    /// No cap.
    #[default]
    Unlimited,
    /// At most `n` deliveries in the listener's lifetime.
    Times(u64),
}

impl CallLimit {
    /// No cap.
    pub const UNLIMITED: CallLimit = CallLimit::Unlimited;
    /// Registered but never delivered to.
    pub const NEVER: CallLimit = CallLimit::Times(0);
    /// Delivered to once.
    pub const ONCE: CallLimit = CallLimit::Times(1);

    /// Returns the cap, or `None` when unlimited.
    #[inline]
    pub fn get(self) -> Option<u64> {
        match self {
            CallLimit::Unlimited => None,
            CallLimit::Times(n) => Some(n),
        }
    }

    /// True if a listener that already ran `calls` times may run again.
    #[inline]
    pub fn allows(self, calls: u64) -> bool {
        match self {
            CallLimit::Unlimited => true,
            CallLimit::Times(n) => calls < n,
        }
    }
}

/// Conversion into a [`CallLimit`] that may reject the input.
///
/// Implemented for `CallLimit`, unsigned integers (infallible), signed
/// integers (negative is an error) and `Option<i64>` (`None` = unlimited).
pub trait IntoCallLimit {
    /// Performs the conversion.
    fn into_call_limit(self) -> Result<CallLimit>;
}

impl IntoCallLimit for CallLimit {
    fn into_call_limit(self) -> Result<CallLimit> {
        Ok(self)
    }
}

impl IntoCallLimit for u32 {
    fn into_call_limit(self) -> Result<CallLimit> {
        Ok(CallLimit::Times(u64::from(self)))
    }
}

impl IntoCallLimit for u64 {
    fn into_call_limit(self) -> Result<CallLimit> {
        Ok(CallLimit::Times(self))
    }
}

impl IntoCallLimit for i64 {
    fn into_call_limit(self) -> Result<CallLimit> {
        u64::try_from(self)
            .map(CallLimit::Times)
            .map_err(|_| Error::NegativeCallLimit { limit: self })
    }
}

impl IntoCallLimit for i32 {
    fn into_call_limit(self) -> Result<CallLimit> {
        i64::from(self).into_call_limit()
    }
}

impl IntoCallLimit for Option<i64> {
    fn into_call_limit(self) -> Result<CallLimit> {
        match self {
            None => Ok(CallLimit::Unlimited),
            Some(n) => n.into_call_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_limits() {
        assert_eq!(CallLimit::default(), CallLimit::UNLIMITED);
        assert_eq!(CallLimit::NEVER.get(), Some(0));
        assert_eq!(CallLimit::ONCE.get(), Some(1));
        assert_eq!(CallLimit::UNLIMITED.get(), None);
    }

    #[test]
    fn test_allows() {
        assert!(CallLimit::UNLIMITED.allows(u64::MAX));
        assert!(!CallLimit::NEVER.allows(0));
        assert!(CallLimit::ONCE.allows(0));
        assert!(!CallLimit::ONCE.allows(1));
        assert!(!CallLimit::Times(3).allows(5));
    }

    #[test]
    fn test_unsigned_inputs() {
        assert_eq!(0_u32.into_call_limit().unwrap(), CallLimit::NEVER);
        assert_eq!(u64::MAX.into_call_limit().unwrap(), CallLimit::Times(u64::MAX));
        assert_eq!(CallLimit::ONCE.into_call_limit().unwrap(), CallLimit::ONCE);
    }

    #[test]
    fn test_signed_inputs() {
        assert_eq!(0_i32.into_call_limit().unwrap(), CallLimit::NEVER);
        assert_eq!(7_i64.into_call_limit().unwrap(), CallLimit::Times(7));
        assert_eq!(None::<i64>.into_call_limit().unwrap(), CallLimit::UNLIMITED);
        assert!(matches!(
            (-1_i32).into_call_limit(),
            Err(Error::NegativeCallLimit { limit: -1 })
        ));
        assert!(matches!(
            Some(i64::MIN).into_call_limit(),
            Err(Error::NegativeCallLimit { limit: i64::MIN })
        ));
    }
}
