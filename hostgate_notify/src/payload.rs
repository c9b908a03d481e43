use hostgate_core::prelude::*;
use serde::Serialize;

use crate::NotificationEvent;

/// Body of a webhook request, in the embed format accepted by chat webhooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub thumbnail: Thumbnail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
}

impl WebhookPayload {
    pub fn build(config: &WebhookConfig, messages: &MessageCatalog, event: &NotificationEvent) -> Self {
        let placeholders = [
            ("username", event.username.as_str()),
            ("domain", event.domain.as_str()),
            ("ip", event.remote_address.as_str()),
            ("reason", event.reason.as_str()),
        ];

        Self {
            embeds: vec![Embed {
                title: messages.get("webhook-title", &placeholders),
                description: messages.get("webhook-description", &placeholders),
                color: config.color,
                thumbnail: Thumbnail {
                    url: event.avatar_url.clone(),
                },
            }],
        }
    }
}
