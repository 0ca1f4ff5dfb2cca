use std::collections::HashMap;
use std::sync::RwLock;

use fairshare_core::{Entity, ExpenseId, GroupId};
use fairshare_expenses::ExpenseRecord;

use crate::error::StoreError;

/// Persistence boundary for expense records.
///
/// Records are append-only facts: `append` and `delete` are the only mutation
/// paths, there are no in-place edits. `list` returns the full non-deleted
/// history of a group in stable insertion order.
pub trait ExpenseStore {
    fn append(&self, record: ExpenseRecord) -> Result<(), StoreError>;

    fn list(&self, group: GroupId) -> Result<Vec<ExpenseRecord>, StoreError>;

    fn get(&self, group: GroupId, id: ExpenseId) -> Result<ExpenseRecord, StoreError>;

    /// Permanently remove a record.
    fn delete(&self, group: GroupId, id: ExpenseId) -> Result<(), StoreError>;
}

/// In-memory expense store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    records: RwLock<HashMap<GroupId, Vec<ExpenseRecord>>>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn append(&self, record: ExpenseRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        let group = records.entry(record.group_id).or_default();

        if group.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateExpense(record.id));
        }

        group.push(record);
        Ok(())
    }

    fn list(&self, group: GroupId) -> Result<Vec<ExpenseRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        Ok(records.get(&group).cloned().unwrap_or_default())
    }

    fn get(&self, group: GroupId, id: ExpenseId) -> Result<ExpenseRecord, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        records
            .get(&group)
            .and_then(|list| list.iter().find(|r| r.id == id))
            .cloned()
            .ok_or(StoreError::ExpenseNotFound(id))
    }

    fn delete(&self, group: GroupId, id: ExpenseId) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        let list = records
            .get_mut(&group)
            .ok_or(StoreError::ExpenseNotFound(id))?;

        let before = list.len();
        list.retain(|r| r.id != id);
        if list.len() == before {
            return Err(StoreError::ExpenseNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fairshare_core::MemberId;
    use fairshare_expenses::{NewExpense, SplitInput};
    use fairshare_groups::{GroupRoster, Member};

    fn sample_record(roster: &GroupRoster, amount: i64) -> ExpenseRecord {
        let payer = roster.member_ids().next().unwrap();
        ExpenseRecord::create(
            NewExpense {
                amount,
                payer,
                split: SplitInput::Equal,
                category: String::new(),
                description: "coffee".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                created_by: payer,
            },
            roster,
        )
        .unwrap()
    }

    fn sample_roster() -> GroupRoster {
        GroupRoster::new(
            GroupId::new(),
            vec![
                Member::new(MemberId::new(), "ada"),
                Member::new(MemberId::new(), "ben"),
            ],
        )
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryExpenseStore::new();
        let roster = sample_roster();

        let first = sample_record(&roster, 100);
        let second = sample_record(&roster, 200);
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let listed = store.list(roster.group_id()).unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn duplicate_append_is_rejected() {
        let store = InMemoryExpenseStore::new();
        let roster = sample_roster();
        let record = sample_record(&roster, 100);

        store.append(record.clone()).unwrap();
        assert_eq!(
            store.append(record.clone()),
            Err(StoreError::DuplicateExpense(record.id))
        );
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = InMemoryExpenseStore::new();
        let roster = sample_roster();

        let keep = sample_record(&roster, 100);
        let drop = sample_record(&roster, 200);
        store.append(keep.clone()).unwrap();
        store.append(drop.clone()).unwrap();

        store.delete(roster.group_id(), drop.id).unwrap();
        assert_eq!(store.list(roster.group_id()).unwrap(), vec![keep]);

        assert_eq!(
            store.delete(roster.group_id(), drop.id),
            Err(StoreError::ExpenseNotFound(drop.id))
        );
    }

    #[test]
    fn get_finds_by_id() {
        let store = InMemoryExpenseStore::new();
        let roster = sample_roster();
        let record = sample_record(&roster, 100);
        store.append(record.clone()).unwrap();

        assert_eq!(store.get(roster.group_id(), record.id).unwrap(), record);
        let missing = ExpenseId::new();
        assert_eq!(
            store.get(roster.group_id(), missing),
            Err(StoreError::ExpenseNotFound(missing))
        );
    }
}
