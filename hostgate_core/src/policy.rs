use crate::{
    allow_list::AllowList,
    attempt::*,
    messages::MessageCatalog,
    reservation::ReservedIdentityRegistry,
};

/// Decide whether a connection attempt may proceed.
///
/// The attempt is accepted only if it connected through an allowed hostname
/// and its username is reserved for the supplied UUID. When both checks fail,
/// the domain failure is the one reported.
pub fn decide(
    attempt: &ConnectionAttempt,
    allow_list: &AllowList,
    registry: &ReservedIdentityRegistry,
    messages: &MessageCatalog,
) -> Decision {
    let domain_valid = attempt
        .hostname
        .as_deref()
        .map_or(false, |host| allow_list.contains(host));
    let identity_valid = registry.is_reserved(&attempt.username, &attempt.uuid);

    if domain_valid && identity_valid {
        return Decision::Accept;
    }

    let kind = if !domain_valid {
        DenyReasonKind::InvalidDomain
    } else {
        DenyReasonKind::UuidMismatch
    };

    Decision::Deny(DenyReason::new(kind, messages))
}
