//! Connection gating for a multiplayer server proxy.
//!
//! This crate holds everything needed to decide whether a login is allowed
//! through: the operator's domain [`AllowList`](allow_list::AllowList), the
//! [`ReservedIdentityRegistry`](reservation::ReservedIdentityRegistry) binding
//! usernames to the one UUID permitted to use them, and the localised
//! [`MessageCatalog`](messages::MessageCatalog) used to explain a refusal.
//!
//! # State and reloads
//!
//! All of the above is bundled into a single immutable [`GateState`](state::GateState)
//! generation, published through [`SharedGateState`](state::SharedGateState).
//! Login handlers take one snapshot per attempt and never lock; the
//! [`ReloadCoordinator`](reload::ReloadCoordinator) builds a complete new
//! generation from disk and swaps it in, so a concurrent decision sees either
//! the old configuration or the new one and never a mixture of the two.
//!
//! # Decisions
//!
//! [`decide`](policy::decide) is a pure, synchronous function. It performs no
//! I/O and never suspends, which allows the host runtime to block on it.

pub mod prelude;

pub mod allow_list;
pub mod attempt;
pub mod config;
pub mod messages;
pub mod policy;
pub mod reload;
pub mod reservation;
pub mod session;
pub mod state;

pub mod utils;
