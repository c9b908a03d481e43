use super::*;

use std::collections::{hash_map::Entry, HashMap};

/// Mapping from case-folded username to the UUID reserved for it.
///
/// Never mutated after construction; a reload produces a new registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedIdentityRegistry {
    reservations: HashMap<String, String>,
}

impl ReservedIdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the raw configuration table.
    ///
    /// Entries are processed in table order. If a UUID is claimed by more
    /// than one username, the first binding wins and the later entries are
    /// skipped.
    pub fn load(raw: Option<&RawReservations>) -> (Self, LoadReport) {
        let mut reservations: HashMap<String, String> = HashMap::new();
        // Case-folded uuid -> case-folded username it's currently bound to
        let mut bound_uuids: HashMap<String, String> = HashMap::new();
        let mut report = LoadReport::default();

        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                tracing::warn!("No reserved UUIDs configured; every identity check will fail");
                return (Self { reservations }, report);
            }
        };

        for (username, details) in raw {
            let reason = match Self::check_entry(username, details.as_ref()) {
                Ok(uuid) => {
                    let username = username.to_lowercase();
                    let folded_uuid = uuid.to_lowercase();

                    match bound_uuids.entry(folded_uuid) {
                        Entry::Occupied(existing) if existing.get() != &username => {
                            Some(SkipReason::DuplicateUuid {
                                bound_to: existing.get().clone(),
                            })
                        }
                        Entry::Occupied(_) => {
                            reservations.insert(username, uuid.to_owned());
                            None
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(username.clone());
                            // A username listed twice under different case keeps only its latest
                            // UUID, which must then stop blocking others
                            if let Some(previous) = reservations.insert(username, uuid.to_owned()) {
                                bound_uuids.remove(&previous.to_lowercase());
                            }
                            None
                        }
                    }
                }
                Err(reason) => Some(reason),
            };

            if let Some(reason) = reason {
                tracing::warn!(%username, ?reason, "Skipping reserved UUID entry");
                report.skipped.push(SkippedEntry {
                    username: username.clone(),
                    reason,
                });
            }
        }

        report.loaded = reservations.len();
        tracing::debug!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Loaded reserved UUIDs"
        );

        (Self { reservations }, report)
    }

    fn check_entry<'a>(
        username: &str,
        details: Option<&'a ReservationDetails>,
    ) -> Result<&'a str, SkipReason> {
        if username.is_empty() {
            return Err(SkipReason::EmptyUsername);
        }
        let details = details.ok_or(SkipReason::MissingDetails)?;
        match details.uuid.as_deref() {
            Some(uuid) if !uuid.is_empty() => Ok(uuid),
            _ => Err(SkipReason::MissingUuid),
        }
    }

    /// Determine whether `uuid` is the UUID reserved for `username`.
    ///
    /// Both comparisons are case-insensitive. An empty argument, or a
    /// username without a reservation, never matches.
    pub fn is_reserved(&self, username: &str, uuid: &str) -> bool {
        if username.is_empty() || uuid.is_empty() {
            return false;
        }
        self.reservations
            .get(&username.to_lowercase())
            .map_or(false, |reserved| reserved.eq_ignore_ascii_case(uuid))
    }

    /// The UUID reserved for a username, as it was written in configuration
    pub fn get(&self, username: &str) -> Option<&str> {
        self.reservations
            .get(&username.to_lowercase())
            .map(String::as_str)
    }

    /// Read-only view of all reservations, keyed by case-folded username
    pub fn reservations(&self) -> &HashMap<String, String> {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}
