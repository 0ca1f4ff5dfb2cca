use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fairshare_core::{GroupId, MemberId, ValueObject};

/// Per-member net balances for one group at one point in time.
///
/// Positive = the group owes this member; negative = this member owes the
/// group. Never persisted: computed, used, discarded. Presentation formats
/// these numbers but must not do its own arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    group_id: GroupId,
    balances: HashMap<MemberId, i64>,
}

impl BalanceSnapshot {
    pub(crate) fn new(group_id: GroupId, balances: HashMap<MemberId, i64>) -> Self {
        Self { group_id, balances }
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Net balance for a member; unknown members read as settled (0).
    pub fn balance_of(&self, member: MemberId) -> i64 {
        self.balances.get(&member).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemberId, i64)> + '_ {
        self.balances.iter().map(|(id, v)| (*id, *v))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Sum of all balances; 0 for any snapshot this crate produces.
    pub fn total(&self) -> i64 {
        self.balances.values().sum()
    }
}

impl ValueObject for BalanceSnapshot {}
