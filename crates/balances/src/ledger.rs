//! The balance fold: full record history -> one snapshot.

use std::collections::HashMap;

use fairshare_core::{EngineResult, MemberId};
use fairshare_expenses::ExpenseRecord;
use fairshare_groups::GroupRoster;

use crate::snapshot::BalanceSnapshot;

/// Fold a group's records into per-member net balances.
///
/// Every roster member starts at 0. Each record credits its payer by the full
/// amount and debits every share holder by their share; the payer's own share
/// simply nets against their credit. Credits and debits cancel unit for unit,
/// so the snapshot is zero-sum by construction.
///
/// The fold is commutative: callers may pass records in any order and get the
/// same snapshot. A record that violates its own invariant fails the whole
/// computation with `CorruptRecord` — a visibly broken record beats a silently
/// wrong balance.
pub fn compute_balances(
    roster: &GroupRoster,
    expenses: &[ExpenseRecord],
) -> EngineResult<BalanceSnapshot> {
    let mut balances: HashMap<MemberId, i64> =
        roster.member_ids().map(|id| (id, 0)).collect();

    for record in expenses {
        record.validate_against(roster)?;

        if let Some(credit) = balances.get_mut(&record.payer) {
            *credit += record.amount;
        }
        for (member, share) in &record.shares {
            if let Some(debit) = balances.get_mut(member) {
                *debit -= share;
            }
        }
    }

    Ok(BalanceSnapshot::new(roster.group_id(), balances))
}
