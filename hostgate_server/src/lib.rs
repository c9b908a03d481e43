//! Host-side integration of the connection gate.
//!
//! [`Gatekeeper`] is the adapter between a proxy's login event and the
//! decision logic in `hostgate_core`: it snapshots the current configuration,
//! decides synchronously, resolves the event, and hands refusals to the
//! notifier. [`run::run_gate`] drives it from standard input for the
//! `hostgate` binary.

pub mod config;

mod gatekeeper;
pub use gatekeeper::*;

pub mod console;
pub mod run;

mod tracing_config;
pub use tracing_config::build_subscriber;
