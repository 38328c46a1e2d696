//! # Failure policies.
//!
//! [`FailurePolicy`] decides what an emission does after a listener callback
//! returns an error.
//!
//! ```text
//! listeners:  L1 ──► L2 (fails) ──► L3
//!
//! Abort     L1 runs, L2 runs and fails, L3 skipped      emit → Err(L2)
//! Continue  L1 runs, L2 runs and fails, L3 runs         emit → Err(L2)
//! ```
//!
//! Under `Continue` every failure is logged at `warn` level and the **first**
//! one is returned once the loop finishes. Neither policy catches panics.

/// What to do with the rest of an emission after a callback fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the emission and return the error (default).
    #[default]
    Abort,
    /// Keep dispatching; return the first error at the end.
    Continue,
}
