use hostgate_core::prelude::*;
use hostgate_notify::{NotificationEvent, Notifier};

use std::sync::Arc;

/// A login waiting on a decision, as presented by the host runtime.
///
/// Exactly one of [`allow`](Self::allow) or [`deny`](Self::deny) is called;
/// both consume the event.
pub trait LoginEvent {
    fn username(&self) -> &str;
    fn uuid(&self) -> &str;
    /// The hostname the client says it connected to, if any
    fn virtual_host(&self) -> Option<&str>;
    fn remote_address(&self) -> String;

    fn allow(self);
    fn deny(self, message: String);
}

/// Applies the gate to logins, and reports the ones it refuses.
pub struct Gatekeeper {
    reload: ReloadCoordinator,
    notifier: Notifier,
}

impl Gatekeeper {
    pub fn new(reload: ReloadCoordinator, notifier: Notifier) -> Self {
        Self { reload, notifier }
    }

    /// The current configuration snapshot
    pub fn state(&self) -> Arc<GateState> {
        self.reload.state().snapshot()
    }

    /// Decide a login and resolve the event accordingly.
    ///
    /// Runs to completion on the calling thread. For a refusal, the event is
    /// denied before anything else happens; the alert broadcast follows, and
    /// the webhook is left running in the background.
    #[tracing::instrument(skip_all, fields(username = event.username()))]
    pub fn on_login<E: LoginEvent>(&self, event: E) -> Decision {
        let state = self.state();

        if !state.settings.enabled {
            event.allow();
            return Decision::Accept;
        }

        let attempt = ConnectionAttempt {
            hostname: event.virtual_host().map(str::to_lowercase),
            username: event.username().to_string(),
            uuid: event.uuid().to_string(),
            remote_address: event.remote_address(),
        };

        if state.settings.debug {
            if let Some(host) = &attempt.hostname {
                let message = state.messages.get(
                    "debug-message",
                    &[("username", attempt.username.as_str()), ("domain", host.as_str())],
                );
                tracing::info!("{}", message);
            }
        }

        let decision = state.evaluate(&attempt);

        match &decision {
            Decision::Accept => event.allow(),
            Decision::Deny(reason) => {
                event.deny(reason.kick_message(&state.messages));

                let notification = NotificationEvent::from_denial(&attempt, reason);
                let alerted = self.notifier.alert(&state, &notification);

                tracing::info!(
                    alerted,
                    "Connection blocked for player '{}' (UUID: {}) using '{}'. Reason: {}",
                    attempt.username,
                    attempt.uuid,
                    attempt.domain_or_unknown(),
                    reason.text
                );

                let webhook = self.notifier.post_webhook(&state, &notification);
                tracing::debug!(?webhook, "Webhook notification handled");
            }
        }

        decision
    }

    /// Reload configuration on behalf of `source`
    pub fn reload(&self, source: &dyn Session) -> Result<ReloadSummary, ReloadError> {
        self.reload.reload(source)
    }
}
