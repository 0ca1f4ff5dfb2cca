use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fairshare_core::{EngineError, EngineResult, Entity, ExpenseId, GroupId, MemberId};
use fairshare_groups::GroupRoster;

use crate::split::{allocate, SplitInput, SplitMode};

/// What kind of financial event a record describes.
///
/// A settlement is an ordinary record to the ledger: the payer fronts the
/// amount and the receiver carries the full share, so the fold never needs a
/// settlement branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Expense,
    Settlement,
}

/// One financial event, immutable once constructed.
///
/// Owned by the expense store after creation. Deleting and re-adding records is
/// the only way balances change; there are no in-place edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub group_id: GroupId,
    /// Positive amount in the smallest whole currency unit.
    pub amount: i64,
    /// Who fronted the money.
    pub payer: MemberId,
    pub kind: ExpenseKind,
    pub split_mode: SplitMode,
    /// Non-negative per-member shares; absent member means share 0.
    pub shares: HashMap<MemberId, i64>,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    /// Who recorded it (distinct from `payer`).
    pub created_by: MemberId,
}

/// Caller input for a new expense; the group comes from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: i64,
    pub payer: MemberId,
    pub split: SplitInput,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_by: MemberId,
}

impl ExpenseRecord {
    /// Build a validated expense record, allocating shares via the split
    /// allocator. Fails rather than construct anything that would later replay
    /// as corrupt.
    pub fn create(input: NewExpense, roster: &GroupRoster) -> EngineResult<Self> {
        if !roster.contains(input.payer) {
            return Err(EngineError::UnknownMember(input.payer));
        }

        let shares = allocate(input.amount, roster, &input.split)?;

        let description = if !input.description.trim().is_empty() {
            input.description.trim().to_string()
        } else if !input.category.trim().is_empty() {
            input.category.trim().to_string()
        } else {
            "Expense".to_string()
        };

        Ok(Self {
            id: ExpenseId::new(),
            group_id: roster.group_id(),
            amount: input.amount,
            payer: input.payer,
            kind: ExpenseKind::Expense,
            split_mode: input.split.mode(),
            shares,
            category: input.category.trim().to_string(),
            description,
            date: input.date,
            created_by: input.created_by,
        })
    }

    /// Build a settle-up record: `payer` repays `amount` to `receiver`.
    ///
    /// Modeled as a single-share custom split (receiver owes the full amount,
    /// payer owes 0), so replaying it moves the payer up by `amount` and the
    /// receiver down by `amount` through the ordinary ledger math.
    pub fn settlement(
        roster: &GroupRoster,
        payer: MemberId,
        receiver: MemberId,
        amount: i64,
        date: NaiveDate,
    ) -> EngineResult<Self> {
        if !roster.contains(payer) {
            return Err(EngineError::UnknownMember(payer));
        }

        let split = SplitInput::Custom(HashMap::from([(receiver, amount)]));
        let shares = allocate(amount, roster, &split)?;

        Ok(Self {
            id: ExpenseId::new(),
            group_id: roster.group_id(),
            amount,
            payer,
            kind: ExpenseKind::Settlement,
            split_mode: SplitMode::Custom,
            shares,
            category: "Repayment".to_string(),
            description: "Settle up".to_string(),
            date,
            created_by: payer,
        })
    }

    /// Re-check the record's own invariant against the roster it is being
    /// replayed with. Any violation is reported as [`EngineError::CorruptRecord`]
    /// naming this record.
    pub fn validate_against(&self, roster: &GroupRoster) -> EngineResult<()> {
        if self.group_id != roster.group_id() {
            return Err(EngineError::corrupt(
                self.id,
                format!("belongs to group {}, not {}", self.group_id, roster.group_id()),
            ));
        }
        if self.amount <= 0 {
            return Err(EngineError::corrupt(
                self.id,
                format!("non-positive amount {}", self.amount),
            ));
        }
        if !roster.contains(self.payer) {
            return Err(EngineError::corrupt(
                self.id,
                format!("payer {} is not a member", self.payer),
            ));
        }

        let mut total: i128 = 0;
        for (member, share) in &self.shares {
            if !roster.contains(*member) {
                return Err(EngineError::corrupt(
                    self.id,
                    format!("share references non-member {member}"),
                ));
            }
            if *share < 0 {
                return Err(EngineError::corrupt(
                    self.id,
                    format!("negative share {share} for {member}"),
                ));
            }
            total += *share as i128;
        }

        if total != self.amount as i128 {
            return Err(EngineError::corrupt(
                self.id,
                format!("shares sum to {total}, amount is {}", self.amount),
            ));
        }

        Ok(())
    }
}

impl Entity for ExpenseRecord {
    type Id = ExpenseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
