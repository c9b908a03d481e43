//! Collects commonly-used names for convenient import

pub use crate::{
    allow_list::AllowList,
    attempt::*,
    config::{ConfigError, DataDirectory, GateConfig, WebhookConfig},
    messages::MessageCatalog,
    policy::decide,
    reload::{ReloadCoordinator, ReloadError, ReloadSummary},
    reservation::{LoadReport, ReservedIdentityRegistry, SkipReason},
    session::*,
    state::{GateSettings, GateState, SharedGateState},
    utils::OrLog,
};
