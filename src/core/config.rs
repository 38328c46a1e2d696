//! # Registry configuration.
//!
//! Provides [`Config`], the settings a [`Registry`](crate::Registry) is built
//! with. Config is used in two ways:
//! 1. **Direct**: `Registry::with_config(config)`
//! 2. **Builder**: `Registry::builder(config).failure_policy(..).build()`
//!
//! ## Sentinel values
//! - `bucket_capacity = 0` → no preallocation for new buckets

use crate::policies::FailurePolicy;

/// Configuration for a registry.
///
/// ## Field semantics
/// - `failure`: what an emission does after a callback error (default `Abort`)
/// - `bucket_capacity`: listeners preallocated per new event bucket (`0` = none)
#[derive(Clone, Debug)]
pub struct Config {
    /// Failure handling for emissions.
    ///
    /// - `Abort`: the first failing callback ends the emission
    /// - `Continue`: remaining listeners still run; the first error is returned
    pub failure: FailurePolicy,

    /// Initial capacity of each newly created bucket.
    ///
    /// Buckets grow as needed; this only avoids reallocations for events that
    /// are known to collect several listeners.
    pub bucket_capacity: usize,
}

impl Config {
    /// Returns the bucket capacity as an `Option`.
    ///
    /// - `None` → start empty
    /// - `Some(n)` → preallocate `n` slots
    #[inline]
    pub fn bucket_capacity(&self) -> Option<usize> {
        if self.bucket_capacity == 0 {
            None
        } else {
            Some(self.bucket_capacity)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `failure = FailurePolicy::Abort` (an error stops the emission)
    /// - `bucket_capacity = 4`
    fn default() -> Self {
        Self {
            failure: FailurePolicy::default(),
            bucket_capacity: 4,
        }
    }
}
