//! Best-effort notification of refused connections.
//!
//! A refusal is reported in two independent ways: an alert message sent to
//! every connected session holding the notify permission, and a JSON embed
//! posted to an external webhook. Neither can fail the login that caused it,
//! and neither is retried.
//!
//! The webhook request runs on a detached task. Nothing is sent back to the
//! caller; a failed delivery is logged at debug level and forgotten.

mod event;
pub use event::*;

mod alert;
pub use alert::*;

mod payload;
pub use payload::*;

mod transport;
pub use transport::*;

mod dispatcher;
pub use dispatcher::*;

mod notifier;
pub use notifier::*;
