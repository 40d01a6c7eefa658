use crate::allowed_origins::AllowedOriginSet;
use crate::configuration::PolicyConfiguration;
use std::sync::{Arc, PoisonError, RwLock};

/// Configuration paired with the allow-list derived from it.
///
/// The allow-list is parsed when the snapshot is built, so a snapshot never
/// disagrees with the configuration it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySnapshot {
    configuration: PolicyConfiguration,
    origins: AllowedOriginSet,
}

impl PolicySnapshot {
    pub fn new(configuration: PolicyConfiguration) -> Self {
        let origins = AllowedOriginSet::parse(configuration.allowed_origins.as_deref());
        Self {
            configuration,
            origins,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.configuration.enabled
    }

    pub fn allowed_methods(&self) -> Option<&str> {
        self.configuration.allowed_methods.as_deref()
    }

    pub fn allowed_origins(&self) -> &AllowedOriginSet {
        &self.origins
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.origins.allows(origin)
    }

    pub fn configuration(&self) -> &PolicyConfiguration {
        &self.configuration
    }
}

impl From<PolicyConfiguration> for PolicySnapshot {
    fn from(configuration: PolicyConfiguration) -> Self {
        Self::new(configuration)
    }
}

/// Source of the policy the filter enforces.
///
/// Implementations are read once per request; whatever they return is used
/// for the whole decision.
pub trait PolicyProvider: Send + Sync {
    fn snapshot(&self) -> Arc<PolicySnapshot>;
}

impl<P: PolicyProvider + ?Sized> PolicyProvider for Arc<P> {
    fn snapshot(&self) -> Arc<PolicySnapshot> {
        (**self).snapshot()
    }
}

impl<P: PolicyProvider + ?Sized> PolicyProvider for &P {
    fn snapshot(&self) -> Arc<PolicySnapshot> {
        (**self).snapshot()
    }
}

/// Fixed configuration that never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct StaticPolicy {
    snapshot: Arc<PolicySnapshot>,
}

impl StaticPolicy {
    pub fn new(configuration: PolicyConfiguration) -> Self {
        Self {
            snapshot: Arc::new(PolicySnapshot::new(configuration)),
        }
    }
}

impl PolicyProvider for StaticPolicy {
    fn snapshot(&self) -> Arc<PolicySnapshot> {
        Arc::clone(&self.snapshot)
    }
}

/// Runtime-mutable configuration shared between the settings writer and the
/// request path.
#[derive(Debug, Default)]
pub struct PolicyStore {
    current: RwLock<Arc<PolicySnapshot>>,
}

impl PolicyStore {
    pub fn new(configuration: PolicyConfiguration) -> Self {
        Self {
            current: RwLock::new(Arc::new(PolicySnapshot::new(configuration))),
        }
    }

    /// Replaces the configuration and rebuilds the allow-list.
    pub fn update(&self, configuration: PolicyConfiguration) {
        let snapshot = Arc::new(PolicySnapshot::new(configuration));
        tracing::info!(
            enabled = snapshot.is_enabled(),
            origins = snapshot.allowed_origins().len(),
            wildcard = snapshot.allowed_origins().is_wildcard(),
            "cors policy updated"
        );
        self.replace(snapshot);
    }

    /// Toggles enforcement, keeping the parsed allow-list.
    pub fn set_enabled(&self, enabled: bool) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if guard.is_enabled() == enabled {
            return;
        }

        let mut next = (**guard).clone();
        next.configuration.enabled = enabled;
        *guard = Arc::new(next);
        tracing::info!(enabled, "cors policy toggled");
    }

    pub fn configuration(&self) -> PolicyConfiguration {
        self.snapshot().configuration().clone()
    }

    fn replace(&self, snapshot: Arc<PolicySnapshot>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }
}

impl PolicyProvider for PolicyStore {
    fn snapshot(&self) -> Arc<PolicySnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;
