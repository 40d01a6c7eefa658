use crate::provider::{PolicyProvider, PolicySnapshot};
use std::sync::Arc;

/// Answers whether an origin may receive CORS headers under the provider's
/// current policy.
#[derive(Debug, Clone)]
pub struct OriginPolicy<P> {
    provider: P,
}

impl<P: PolicyProvider> OriginPolicy<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// `origin` is expected to be trimmed already; entries are not.
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.provider.snapshot().is_allowed(origin)
    }

    pub fn allowed_methods(&self) -> Option<String> {
        self.provider
            .snapshot()
            .allowed_methods()
            .map(str::to_owned)
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.snapshot().is_enabled()
    }

    pub fn snapshot(&self) -> Arc<PolicySnapshot> {
        self.provider.snapshot()
    }
}

#[cfg(test)]
#[path = "evaluator_test.rs"]
mod evaluator_test;
