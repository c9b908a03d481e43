use hostgate_core::prelude::*;

use std::sync::Arc;

use crate::NotificationEvent;

/// Access to the sessions currently connected to the host
pub trait SessionDirectory: Send + Sync {
    fn sessions(&self) -> Vec<Arc<dyn Session>>;
}

/// A directory with nobody in it
pub struct NoSessions;

impl SessionDirectory for NoSessions {
    fn sessions(&self) -> Vec<Arc<dyn Session>> {
        Vec::new()
    }
}

/// Render the in-game alert for a refused connection
pub fn alert_message(messages: &MessageCatalog, event: &NotificationEvent) -> String {
    messages.get(
        "alert-message",
        &[
            ("username", event.username.as_str()),
            ("domain", event.domain.as_str()),
            ("reason", event.reason.as_str()),
        ],
    )
}

/// Send the alert to every session holding [`PERMISSION_NOTIFY`].
///
/// A failed delivery is skipped. Returns the number of sessions the alert
/// reached.
pub fn broadcast_alert(
    directory: &dyn SessionDirectory,
    messages: &MessageCatalog,
    event: &NotificationEvent,
) -> usize {
    let text = alert_message(messages, event);
    let mut delivered = 0;

    for session in directory
        .sessions()
        .iter()
        .filter(|s| s.has_permission(PERMISSION_NOTIFY))
    {
        match session.send_message(&text) {
            Ok(()) => delivered += 1,
            Err(e) => tracing::debug!(session = session.name(), error = %e, "Couldn't deliver alert"),
        }
    }

    delivered
}
