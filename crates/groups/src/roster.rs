use serde::{Deserialize, Serialize};

use fairshare_core::{GroupId, MemberId};

use crate::member::Member;

/// The ordered member list of one group, as supplied by the membership source.
///
/// The order is the group's stored member order and is load-bearing: equal-split
/// remainder units go to the first members in this order, and the default
/// payer/receiver tie-breaks below follow it. Callers pass a roster explicitly
/// on every engine call; the tie-break rule is this type, not UI incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRoster {
    group_id: GroupId,
    members: Vec<Member>,
}

impl GroupRoster {
    /// Build a roster, preserving order and dropping duplicate ids (first
    /// occurrence wins).
    pub fn new(group_id: GroupId, members: Vec<Member>) -> Self {
        let mut seen: Vec<MemberId> = Vec::with_capacity(members.len());
        let members = members
            .into_iter()
            .filter(|m| {
                if seen.contains(&m.id) {
                    false
                } else {
                    seen.push(m.id);
                    true
                }
            })
            .collect();
        Self { group_id, members }
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Member ids in group order.
    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Default payer for a new expense: the acting user if they are a member,
    /// otherwise the first member in group order.
    pub fn default_payer(&self, me: Option<MemberId>) -> Option<MemberId> {
        me.filter(|id| self.contains(*id))
            .or_else(|| self.members.first().map(|m| m.id))
    }

    /// Default receiver for a settle-up: the first member other than the acting
    /// user, falling back to the first member.
    pub fn default_receiver(&self, me: Option<MemberId>) -> Option<MemberId> {
        self.members
            .iter()
            .find(|m| Some(m.id) != me)
            .or_else(|| self.members.first())
            .map(|m| m.id)
    }
}
