//! Dispatch policies.
//!
//! This module groups the knobs that control **in which order** listeners run,
//! **how often** each one may run and **what happens** when one fails.
//!
//! ## Contents
//! - [`Priority`] ordering of listeners within one event (higher first)
//! - [`CallLimit`] per-listener cap on deliveries, with [`IntoCallLimit`]
//!   for signed/optional inputs
//! - [`FailurePolicy`] abort or continue an emission after a callback error
//!
//! ## Defaults
//! - `Priority::NORMAL` (0).
//! - `CallLimit::UNLIMITED`.
//! - `FailurePolicy::Abort`.

mod failure;
mod limit;
mod priority;

pub use failure::FailurePolicy;
pub use limit::{CallLimit, IntoCallLimit};
pub use priority::Priority;
