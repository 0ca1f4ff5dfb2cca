//! Engine error model.
//!
//! Money is at stake: every failure here is surfaced at the offending operation
//! and never coerced into a "best guess" value. Recovery belongs to the caller.

use thiserror::Error;

use crate::id::{ExpenseId, MemberId};

/// Result type used across the engine crates.
pub type EngineResult<T> = Result<T, EngineError>;

/// Deterministic, domain-level failure of a split or ledger operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Amount is non-positive, or a share is negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),

    /// The group roster is empty; there is nobody to split against.
    #[error("group has no members")]
    NoMembers,

    /// A share or payer references someone outside the roster.
    #[error("unknown member: {0}")]
    UnknownMember(MemberId),

    /// Custom shares do not sum to the expense amount. Shares are decided by
    /// the caller, never rescaled here.
    #[error("custom shares sum to {actual}, expected {expected}")]
    SplitMismatch { expected: i64, actual: i64 },

    /// A stored record violates its own invariant when replayed.
    #[error("corrupt expense record {id}: {reason}")]
    CorruptRecord { id: ExpenseId, reason: String },

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl EngineError {
    pub fn corrupt(id: ExpenseId, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            id,
            reason: reason.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
