use thiserror::Error;

/// Permission required to receive blocked-connection alerts
pub const PERMISSION_NOTIFY: &str = "hostgate.notify";

/// Permission required to reload the gate configuration
pub const PERMISSION_RELOAD: &str = "hostgate.reload";

/// Error returned when a message couldn't be delivered to a session
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Session {0} is no longer connected")]
    Disconnected(String),
    #[error("Delivery failed: {0}")]
    Other(String),
}

/// A connected party that can hold permissions and receive text.
///
/// This is implemented by the host runtime for its players and for its
/// console. It serves both as the target of alert broadcasts and as the
/// source of administrative commands.
pub trait Session: Send + Sync {
    /// A name to identify this session in logs
    fn name(&self) -> &str;

    /// Determine whether this session holds the given permission node
    fn has_permission(&self, permission: &str) -> bool;

    /// Send a (possibly formatted) text message to this session
    fn send_message(&self, message: &str) -> Result<(), DeliveryError>;
}
