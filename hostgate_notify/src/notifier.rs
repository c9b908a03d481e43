use hostgate_core::prelude::*;

use std::sync::Arc;

use crate::{broadcast_alert, DispatchOutcome, NotificationEvent, SessionDirectory, WebhookDispatcher};

/// Reports refused connections to privileged sessions and the configured webhook
pub struct Notifier {
    sessions: Arc<dyn SessionDirectory>,
    webhook: WebhookDispatcher,
}

impl Notifier {
    pub fn new(sessions: Arc<dyn SessionDirectory>, webhook: WebhookDispatcher) -> Self {
        Self { sessions, webhook }
    }

    /// Send the in-game alert, on the calling thread
    pub fn alert(&self, state: &GateState, event: &NotificationEvent) -> usize {
        broadcast_alert(self.sessions.as_ref(), &state.messages, event)
    }

    /// Start webhook delivery, if configured in `state`
    pub fn post_webhook(&self, state: &GateState, event: &NotificationEvent) -> DispatchOutcome {
        self.webhook.dispatch(&state.webhook, &state.messages, event)
    }
}
