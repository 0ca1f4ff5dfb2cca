//! Split allocation: amount + mode -> per-member shares.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fairshare_core::{EngineError, EngineResult, MemberId};
use fairshare_groups::GroupRoster;

/// Policy for dividing an expense's amount among members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    Equal,
    Custom,
}

/// Caller-side split request: the mode plus, for custom splits, the shares.
///
/// Custom shares may be sparse; a member absent from the map owes 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "shares")]
pub enum SplitInput {
    Equal,
    Custom(HashMap<MemberId, i64>),
}

impl SplitInput {
    pub fn mode(&self) -> SplitMode {
        match self {
            SplitInput::Equal => SplitMode::Equal,
            SplitInput::Custom(_) => SplitMode::Custom,
        }
    }
}

/// Allocate `amount` (smallest currency unit) across the roster.
///
/// Equal mode: floor-divide, then hand the remainder out one unit at a time in
/// roster order, so exactly `amount % n` members owe one unit more. The result
/// always sums to `amount` and is reproducible given the same roster.
///
/// Custom mode: shares are taken as given and validated, never rescaled. A sum
/// that differs from `amount` is the caller's mistake to fix, not ours to paper
/// over.
pub fn allocate(
    amount: i64,
    roster: &GroupRoster,
    split: &SplitInput,
) -> EngineResult<HashMap<MemberId, i64>> {
    if amount <= 0 {
        return Err(EngineError::InvalidAmount(amount));
    }
    if roster.is_empty() {
        return Err(EngineError::NoMembers);
    }

    match split {
        SplitInput::Equal => Ok(allocate_equal(amount, roster)),
        SplitInput::Custom(shares) => allocate_custom(amount, roster, shares),
    }
}

fn allocate_equal(amount: i64, roster: &GroupRoster) -> HashMap<MemberId, i64> {
    let n = roster.len() as i64;
    let base = amount / n;
    let remainder = amount % n;

    roster
        .member_ids()
        .enumerate()
        .map(|(i, id)| (id, base + if (i as i64) < remainder { 1 } else { 0 }))
        .collect()
}

fn allocate_custom(
    amount: i64,
    roster: &GroupRoster,
    shares: &HashMap<MemberId, i64>,
) -> EngineResult<HashMap<MemberId, i64>> {
    let mut total: i128 = 0;
    for (member, share) in shares {
        if !roster.contains(*member) {
            return Err(EngineError::UnknownMember(*member));
        }
        if *share < 0 {
            return Err(EngineError::InvalidAmount(*share));
        }
        total += *share as i128;
    }

    if total != amount as i128 {
        return Err(EngineError::SplitMismatch {
            expected: amount,
            actual: i64::try_from(total).unwrap_or(i64::MAX),
        });
    }

    Ok(shares.clone())
}
