//! `fairshare-groups` — group membership as an explicit engine input.
//!
//! Membership is owned by an external collaborator; the engine only ever sees
//! it as a [`GroupRoster`] passed in on every call. Nothing in here reads
//! ambient or cached state.

pub mod member;
pub mod roster;

pub use member::Member;
pub use roster::GroupRoster;
