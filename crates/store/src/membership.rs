use std::collections::HashMap;
use std::sync::RwLock;

use fairshare_core::GroupId;
use fairshare_groups::GroupRoster;

use crate::error::StoreError;

/// Supplies the current ordered member list of a group.
///
/// The engine receives membership through this trait on every call; it never
/// caches a roster across calls, so joins and leaves take effect on the next
/// read.
pub trait MembershipSource {
    fn roster(&self, group: GroupId) -> Result<GroupRoster, StoreError>;
}

/// In-memory membership source.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryMembershipSource {
    rosters: RwLock<HashMap<GroupId, GroupRoster>>,
}

impl InMemoryMembershipSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace a group's roster.
    pub fn put_roster(&self, roster: GroupRoster) -> Result<(), StoreError> {
        let mut rosters = self
            .rosters
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        rosters.insert(roster.group_id(), roster);
        Ok(())
    }
}

impl MembershipSource for InMemoryMembershipSource {
    fn roster(&self, group: GroupId) -> Result<GroupRoster, StoreError> {
        let rosters = self
            .rosters
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        rosters
            .get(&group)
            .cloned()
            .ok_or(StoreError::GroupNotFound(group))
    }
}
