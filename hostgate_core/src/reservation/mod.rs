//! Username reservations.
//!
//! A reservation binds a username to the single UUID permitted to log in
//! with it. The [`ReservedIdentityRegistry`] is rebuilt from scratch from the
//! raw configuration mapping on every load; malformed or conflicting entries
//! are skipped and described in the returned [`LoadReport`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod registry;
pub use registry::*;

/// The details attached to one username in the `reserved-uuid` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetails {
    #[serde(default)]
    pub uuid: Option<String>,
}

impl ReservationDetails {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
        }
    }
}

/// The `reserved-uuid` table as read from configuration, in document order.
///
/// A `None` value corresponds to an entry whose details are null.
pub type RawReservations = IndexMap<String, Option<ReservationDetails>>;

/// Reasons for which a configured reservation can be ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The username key was empty
    EmptyUsername,
    /// The entry had no details object
    MissingDetails,
    /// The details had an absent or empty `uuid`
    MissingUuid,
    /// The UUID was already bound to another username earlier in the table
    DuplicateUuid { bound_to: String },
}

/// A reservation entry that was not loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub username: String,
    pub reason: SkipReason,
}

/// Summary of a registry load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of usernames bound after the load
    pub loaded: usize,
    pub skipped: Vec<SkippedEntry>,
}
