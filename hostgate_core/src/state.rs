use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::{
    allow_list::AllowList,
    attempt::*,
    config::{DataDirectory, GateConfig, WebhookConfig},
    messages::MessageCatalog,
    policy,
    reservation::{LoadReport, ReservedIdentityRegistry},
};

/// Scalar settings from the gate configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSettings {
    pub enabled: bool,
    pub debug: bool,
    pub language: String,
}

/// One complete, immutable generation of gate configuration.
///
/// Everything a login decision or its notifications need is read from a
/// single `GateState`, so that they always agree with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateState {
    pub settings: GateSettings,
    pub allow_list: AllowList,
    pub registry: ReservedIdentityRegistry,
    pub webhook: WebhookConfig,
    pub messages: MessageCatalog,
    /// What happened while building `registry`
    pub registry_report: LoadReport,
}

impl GateState {
    /// Derive a state from an already-loaded configuration and message catalog
    pub fn from_config(config: GateConfig, messages: MessageCatalog) -> Self {
        let (registry, registry_report) = ReservedIdentityRegistry::load(config.reserved_uuid.as_ref());

        if config.allowed_domains.is_empty() {
            tracing::warn!("No allowed domains configured; every connection will be refused");
        }

        Self {
            settings: GateSettings {
                enabled: config.enabled,
                debug: config.debug,
                language: config.lang,
            },
            allow_list: AllowList::from_domains(&config.allowed_domains),
            registry,
            webhook: config.webhook,
            messages,
            registry_report,
        }
    }

    /// Read configuration and messages from the data directory
    pub fn load(data_dir: &DataDirectory) -> Self {
        let config = GateConfig::load(data_dir);
        let messages = MessageCatalog::load(data_dir, &config.lang);
        Self::from_config(config, messages)
    }

    /// Evaluate an attempt against this state. A disabled gate accepts
    /// everything without checking.
    pub fn evaluate(&self, attempt: &ConnectionAttempt) -> Decision {
        if !self.settings.enabled {
            return Decision::Accept;
        }
        policy::decide(attempt, &self.allow_list, &self.registry, &self.messages)
    }
}

/// The currently published [`GateState`].
///
/// Reads are lock-free. Publishing replaces the whole state with a single
/// pointer swap; readers holding an older snapshot keep it until they drop
/// it.
#[derive(Debug)]
pub struct SharedGateState {
    current: ArcSwap<GateState>,
}

impl SharedGateState {
    pub fn new(initial: GateState) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Take a snapshot of the current state
    pub fn snapshot(&self) -> Arc<GateState> {
        self.current.load_full()
    }

    /// Replace the current state
    pub fn publish(&self, state: GateState) {
        self.current.store(Arc::new(state));
    }
}
