use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use fairshare_balances::{compute_balances, BalanceSnapshot};
use fairshare_core::{EngineError, ExpenseId, GroupId, MemberId};
use fairshare_expenses::{ExpenseRecord, NewExpense};

use crate::error::StoreError;
use crate::expense_store::ExpenseStore;
use crate::membership::MembershipSource;

/// Application-layer failure: either the engine rejected the operation, a
/// collaborator failed, or the caller lacks permission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Only whoever recorded an expense may delete it.
    #[error("only the creator may delete an expense")]
    Forbidden,
}

/// Composes the allocator, the ledger, and the external collaborators.
///
/// Writes build one validated record and append it; reads replay the group's
/// full history through the ledger. The snapshot is the single source of truth
/// for who owes whom — callers display it, they never re-derive it.
pub struct GroupLedgerService<M, S> {
    membership: M,
    expenses: S,
}

impl<M: MembershipSource, S: ExpenseStore> GroupLedgerService<M, S> {
    pub fn new(membership: M, expenses: S) -> Self {
        Self {
            membership,
            expenses,
        }
    }

    /// Record a new expense for a group.
    pub fn add_expense(
        &self,
        group: GroupId,
        input: NewExpense,
    ) -> Result<ExpenseRecord, ServiceError> {
        let roster = self.membership.roster(group)?;
        let record = ExpenseRecord::create(input, &roster)?;
        self.expenses.append(record.clone())?;
        info!(expense = %record.id, %group, amount = record.amount, "expense recorded");
        Ok(record)
    }

    /// Record a repayment of `amount` from `payer` to `receiver`.
    pub fn settle_up(
        &self,
        group: GroupId,
        payer: MemberId,
        receiver: MemberId,
        amount: i64,
        date: NaiveDate,
    ) -> Result<ExpenseRecord, ServiceError> {
        let roster = self.membership.roster(group)?;
        let record = ExpenseRecord::settlement(&roster, payer, receiver, amount, date)?;
        self.expenses.append(record.clone())?;
        info!(expense = %record.id, %group, amount, "repayment recorded");
        Ok(record)
    }

    /// Permanently delete an expense. Creator-only.
    pub fn delete_expense(
        &self,
        group: GroupId,
        expense: ExpenseId,
        requested_by: MemberId,
    ) -> Result<(), ServiceError> {
        let record = self.expenses.get(group, expense)?;
        if record.created_by != requested_by {
            return Err(ServiceError::Forbidden);
        }
        self.expenses.delete(group, expense)?;
        info!(%expense, %group, "expense deleted");
        Ok(())
    }

    /// Current per-member balances, recomputed from the full record history.
    pub fn balances(&self, group: GroupId) -> Result<BalanceSnapshot, ServiceError> {
        let roster = self.membership.roster(group)?;
        let records = self.expenses.list(group)?;
        let snapshot = compute_balances(&roster, &records)?;
        debug!(%group, members = snapshot.len(), records = records.len(), "snapshot computed");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense_store::InMemoryExpenseStore;
    use crate::membership::InMemoryMembershipSource;
    use fairshare_expenses::SplitInput;
    use fairshare_groups::{GroupRoster, Member};

    fn service_with_group(
        n: usize,
    ) -> (
        GroupLedgerService<InMemoryMembershipSource, InMemoryExpenseStore>,
        GroupId,
        Vec<MemberId>,
    ) {
        let membership = InMemoryMembershipSource::new();
        let roster = GroupRoster::new(
            GroupId::new(),
            (0..n)
                .map(|i| Member::new(MemberId::new(), format!("m{i}")))
                .collect(),
        );
        let group = roster.group_id();
        let ids: Vec<_> = roster.member_ids().collect();
        membership.put_roster(roster).unwrap();

        (
            GroupLedgerService::new(membership, InMemoryExpenseStore::new()),
            group,
            ids,
        )
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn equal_input(amount: i64, payer: MemberId) -> NewExpense {
        NewExpense {
            amount,
            payer,
            split: SplitInput::Equal,
            category: "Food".to_string(),
            description: "Dinner".to_string(),
            date: test_date(),
            created_by: payer,
        }
    }

    #[test]
    fn add_then_settle_walks_the_expected_balances() {
        let (service, group, ids) = service_with_group(3);

        service.add_expense(group, equal_input(1000, ids[0])).unwrap();
        let snapshot = service.balances(group).unwrap();
        assert_eq!(snapshot.balance_of(ids[0]), 666);
        assert_eq!(snapshot.balance_of(ids[1]), -333);
        assert_eq!(snapshot.balance_of(ids[2]), -333);

        service
            .settle_up(group, ids[1], ids[0], 333, test_date())
            .unwrap();
        let snapshot = service.balances(group).unwrap();
        assert_eq!(snapshot.balance_of(ids[0]), 333);
        assert_eq!(snapshot.balance_of(ids[1]), 0);
        assert_eq!(snapshot.balance_of(ids[2]), -333);
        assert_eq!(snapshot.total(), 0);
    }

    #[test]
    fn split_mismatch_never_reaches_the_store() {
        let (service, group, ids) = service_with_group(3);

        let shares = std::collections::HashMap::from([(ids[0], 300), (ids[1], 300)]);
        let mut input = equal_input(900, ids[0]);
        input.split = SplitInput::Custom(shares);

        let err = service.add_expense(group, input).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Engine(EngineError::SplitMismatch {
                expected: 900,
                actual: 600
            })
        );
        assert!(service.balances(group).unwrap().iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn only_the_creator_may_delete() {
        let (service, group, ids) = service_with_group(2);

        let record = service.add_expense(group, equal_input(100, ids[0])).unwrap();

        let err = service
            .delete_expense(group, record.id, ids[1])
            .unwrap_err();
        assert_eq!(err, ServiceError::Forbidden);

        service.delete_expense(group, record.id, ids[0]).unwrap();
        let snapshot = service.balances(group).unwrap();
        assert_eq!(snapshot.balance_of(ids[0]), 0);
        assert_eq!(snapshot.balance_of(ids[1]), 0);
    }

    #[test]
    fn deleting_a_record_rewinds_its_effect() {
        let (service, group, ids) = service_with_group(2);

        service.add_expense(group, equal_input(100, ids[0])).unwrap();
        let second = service.add_expense(group, equal_input(400, ids[1])).unwrap();

        service.delete_expense(group, second.id, ids[1]).unwrap();

        let snapshot = service.balances(group).unwrap();
        assert_eq!(snapshot.balance_of(ids[0]), 50);
        assert_eq!(snapshot.balance_of(ids[1]), -50);
    }

    #[test]
    fn unknown_group_surfaces_store_error() {
        let (service, _, ids) = service_with_group(1);
        let other = GroupId::new();

        let err = service.add_expense(other, equal_input(100, ids[0])).unwrap_err();
        assert_eq!(err, ServiceError::Store(StoreError::GroupNotFound(other)));
    }
}
