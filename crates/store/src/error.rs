use thiserror::Error;

use fairshare_core::{ExpenseId, GroupId};

/// Failure of an external collaborator (membership source or expense store).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    #[error("expense already recorded: {0}")]
    DuplicateExpense(ExpenseId),

    /// Backend failure (for the in-memory stores: a poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}
