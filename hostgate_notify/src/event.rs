use hostgate_core::prelude::*;

/// Avatar service used for webhook thumbnails
pub const AVATAR_BASE_URL: &str = "https://minotar.net/avatar/";

/// Build the avatar URL for a player UUID
pub fn avatar_url(uuid: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, uuid)
}

/// Everything the alert and webhook messages say about a refused connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub username: String,
    /// The hostname used, or `"unknown"`
    pub domain: String,
    pub remote_address: String,
    /// The rendered reason text
    pub reason: String,
    pub avatar_url: String,
}

impl NotificationEvent {
    pub fn from_denial(attempt: &ConnectionAttempt, reason: &DenyReason) -> Self {
        Self {
            username: attempt.username.clone(),
            domain: attempt.domain_or_unknown().to_string(),
            remote_address: attempt.remote_address.clone(),
            reason: reason.text.clone(),
            avatar_url: avatar_url(&attempt.uuid),
        }
    }
}
