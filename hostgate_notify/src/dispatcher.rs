use hostgate_core::prelude::*;
use tokio::runtime::Handle;
use tracing::Instrument;

use std::sync::Arc;

use crate::{HttpTransport, NotificationEvent, WebhookPayload, WebhookTransport};

/// What [`WebhookDispatcher::dispatch`] did with a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The webhook is disabled or has no URL
    Disabled,
    /// There was no async runtime to send it on, so it was dropped
    NoRuntime,
    /// A delivery task was started
    Spawned,
}

/// Sends webhook notifications in the background.
///
/// Each notification is a single request on its own detached task, with no
/// retry and no result returned to the caller.
pub struct WebhookDispatcher {
    transport: Arc<dyn WebhookTransport>,
    runtime: Option<Handle>,
}

impl WebhookDispatcher {
    /// Construct a dispatcher using the tokio runtime of the calling context,
    /// if there is one
    pub fn new(transport: Arc<dyn WebhookTransport>) -> Self {
        Self {
            transport,
            runtime: Handle::try_current().ok(),
        }
    }

    /// A dispatcher posting over HTTP on the current runtime
    pub fn http() -> Self {
        Self::new(Arc::new(HttpTransport::new()))
    }

    /// Start delivery of a notification and return immediately
    pub fn dispatch(
        &self,
        config: &WebhookConfig,
        messages: &MessageCatalog,
        event: &NotificationEvent,
    ) -> DispatchOutcome {
        if !config.is_active() {
            return DispatchOutcome::Disabled;
        }

        let Some(runtime) = &self.runtime else {
            tracing::debug!("No async runtime available; dropping webhook notification");
            return DispatchOutcome::NoRuntime;
        };

        let payload = WebhookPayload::build(config, messages, event);
        let url = config.url.clone();
        let transport = Arc::clone(&self.transport);
        let span = tracing::debug_span!("webhook", username = %event.username);

        // Detached: the handle is dropped and the task is never awaited
        runtime.spawn(
            async move {
                let result = match serde_json::to_string(&payload) {
                    Ok(body) => transport.post_json(&url, body).await,
                    Err(e) => Err(e.into()),
                };
                match result {
                    Ok(()) => tracing::debug!("Webhook notification delivered"),
                    Err(e) => tracing::debug!(error = %e, "Webhook notification failed"),
                }
            }
            .instrument(span),
        );

        DispatchOutcome::Spawned
    }
}
