use serde::{Deserialize, Serialize};

use crate::messages::MessageCatalog;

/// Rendering of an absent hostname in any user-facing or notification text
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// The details of a single login, as supplied by the host runtime.
///
/// These values are trusted as given; nothing here is cryptographically
/// verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionAttempt {
    /// The virtual host the client connected through, if it sent one
    pub hostname: Option<String>,
    pub username: String,
    pub uuid: String,
    pub remote_address: String,
}

impl ConnectionAttempt {
    /// The hostname for display, or `"unknown"` if none was supplied
    pub fn domain_or_unknown(&self) -> &str {
        self.hostname.as_deref().unwrap_or(UNKNOWN_DOMAIN)
    }
}

/// Why a connection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReasonKind {
    /// The client didn't connect through an allowed hostname
    InvalidDomain,
    /// The username is reserved, and the supplied UUID isn't the one it's bound to
    UuidMismatch,
}

impl DenyReasonKind {
    /// Message key for the short reason text
    pub fn reason_key(&self) -> &'static str {
        match self {
            Self::InvalidDomain => "reason-invalid-domain",
            Self::UuidMismatch => "reason-uuid-mismatch",
        }
    }

    /// Message key for the disconnection message shown to the player
    pub fn kick_key(&self) -> &'static str {
        match self {
            Self::InvalidDomain => "kick-message",
            Self::UuidMismatch => "kick-reserved-uuid",
        }
    }
}

/// A refusal, with its reason already rendered in the configured language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyReason {
    pub kind: DenyReasonKind,
    pub text: String,
}

impl DenyReason {
    pub fn new(kind: DenyReasonKind, messages: &MessageCatalog) -> Self {
        Self {
            kind,
            text: messages.get(kind.reason_key(), &[]),
        }
    }

    /// Render the message to disconnect the player with
    pub fn kick_message(&self, messages: &MessageCatalog) -> String {
        messages.get(self.kind.kick_key(), &[("reason", self.text.as_str())])
    }
}

/// The outcome of evaluating a [`ConnectionAttempt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// The reason kind, if this is a refusal
    pub fn deny_kind(&self) -> Option<DenyReasonKind> {
        match self {
            Self::Accept => None,
            Self::Deny(reason) => Some(reason.kind),
        }
    }
}
