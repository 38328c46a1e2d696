//! Dispatch core: event buckets, ordering and the emit loop.
//!
//! The public API from this module is [`Registry`] (with its [`Config`] and
//! [`RegistryBuilder`]) and the [`Dispatch`] trait it implements.
//!
//! Internal modules:
//! - [`bucket`]: priority-ordered listener sequence for one event;
//! - [`registry`]: name → bucket map, register/emit/unregister/reset;
//! - [`dispatch`]: object-safe façade for dependency injection;
//! - [`builder`]: registry construction with non-default settings;
//! - [`config`]: registry settings.

mod bucket;
mod builder;
mod config;
mod dispatch;
mod registry;

pub use builder::RegistryBuilder;
pub use config::Config;
pub use dispatch::Dispatch;
pub use registry::Registry;
