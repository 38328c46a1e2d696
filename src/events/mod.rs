//! Event keys and payloads.
//!
//! ## Contents
//! - [`EventName`] validated bucket key (`[A-Za-z0-9._]+`)
//! - [`Args`], [`ArgError`] positional, type-erased argument list used as the
//!   default payload type
//!
//! Any other `A` can be used as the payload type of a
//! [`Registry<A>`](crate::Registry); `Args` only exists for events whose
//! arity differs from one emission to the next.

mod args;
mod name;

pub use args::{ArgError, Args};
pub use name::EventName;

pub(crate) use name::validate as validate_name;
