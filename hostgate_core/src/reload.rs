use parking_lot::Mutex;
use thiserror::Error;

use std::sync::Arc;

use crate::{
    config::DataDirectory,
    session::{Session, PERMISSION_RELOAD},
    state::{GateState, SharedGateState},
    utils::OrLog,
};

/// Message shown when the reload permission is missing and the catalog has no text for it
const NO_PERMISSION_FALLBACK: &str = "You don't have permission to execute this command!";

/// An error preventing a reload from taking place
#[derive(Debug, Clone, Error)]
pub enum ReloadError {
    #[error("{0} is not permitted to reload the configuration")]
    NotAuthorised(String),
}

/// Brief description of a newly published configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadSummary {
    pub enabled: bool,
    pub allowed_domains: usize,
    pub reservations: usize,
    pub skipped_reservations: usize,
    pub webhook_active: bool,
}

impl ReloadSummary {
    /// Summarise a state
    pub fn of(state: &GateState) -> Self {
        Self {
            enabled: state.settings.enabled,
            allowed_domains: state.allow_list.len(),
            reservations: state.registry.len(),
            skipped_reservations: state.registry_report.skipped.len(),
            webhook_active: state.webhook.is_active(),
        }
    }
}

/// Rebuilds the gate state from disk and publishes it.
///
/// Reloads are serialised; one started while another is running waits for
/// it to finish, then reads the files again itself.
pub struct ReloadCoordinator {
    data_dir: DataDirectory,
    state: Arc<SharedGateState>,
    reload_lock: Mutex<()>,
}

impl ReloadCoordinator {
    pub fn new(data_dir: DataDirectory, state: Arc<SharedGateState>) -> Self {
        Self {
            data_dir,
            state,
            reload_lock: Mutex::new(()),
        }
    }

    /// Load the initial state and construct a coordinator to manage it
    pub fn bootstrap(data_dir: DataDirectory) -> Self {
        let state = Arc::new(SharedGateState::new(GateState::load(&data_dir)));
        Self::new(data_dir, state)
    }

    /// The state this coordinator publishes to
    pub fn state(&self) -> &Arc<SharedGateState> {
        &self.state
    }

    /// Handle a reload request from `source`.
    ///
    /// The source must hold [`PERMISSION_RELOAD`]; otherwise it is told so and
    /// nothing changes. On success the source is sent the `reload-success`
    /// message.
    #[tracing::instrument(skip_all, fields(source = source.name()))]
    pub fn reload(&self, source: &dyn Session) -> Result<ReloadSummary, ReloadError> {
        if !source.has_permission(PERMISSION_RELOAD) {
            let state = self.state.snapshot();
            let mut text = state.messages.get("reload-no-permission", &[]);
            if text == "reload-no-permission" {
                text = NO_PERMISSION_FALLBACK.to_string();
            }
            source
                .send_message(&text)
                .or_log("sending reload refusal");
            return Err(ReloadError::NotAuthorised(source.name().to_string()));
        }

        let summary = self.reload_now();

        let reply = self.state.snapshot().messages.get("reload-success", &[]);
        source.send_message(&reply).or_log("sending reload confirmation");

        Ok(summary)
    }

    /// Reload without any permission check
    pub fn reload_now(&self) -> ReloadSummary {
        let _guard = self.reload_lock.lock();

        let new_state = GateState::load(&self.data_dir);
        let summary = ReloadSummary::of(&new_state);
        self.state.publish(new_state);

        tracing::info!(?summary, "Configuration, messages, webhook settings and reserved UUIDs reloaded");

        summary
    }
}
