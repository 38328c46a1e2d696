use crate::core::Config;
use crate::core::registry::Registry;
use crate::policies::FailurePolicy;

/// Builder for constructing a [`Registry`] with non-default settings.
pub struct RegistryBuilder {
    cfg: Config,
}

impl RegistryBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Sets what an emission does after a callback error.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.cfg.failure = policy;
        self
    }

    /// Sets the initial capacity of new event buckets (`0` = none).
    pub fn bucket_capacity(mut self, capacity: usize) -> Self {
        self.cfg.bucket_capacity = capacity;
        self
    }

    /// Builds an empty registry.
    pub fn build<A>(self) -> Registry<A> {
        Registry::with_config(self.cfg)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
