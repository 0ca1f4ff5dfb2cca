//! `fairshare-store` — the boundary to the engine's external collaborators.
//!
//! Membership and persistence are owned elsewhere; this crate defines the
//! traits the engine consumes them through, in-memory implementations for
//! tests and dev, and [`GroupLedgerService`], the application-layer composition
//! (build a record via the allocator, persist it, replay history for reads).

pub mod error;
pub mod expense_store;
pub mod membership;
pub mod service;

pub use error::StoreError;
pub use expense_store::{ExpenseStore, InMemoryExpenseStore};
pub use membership::{InMemoryMembershipSource, MembershipSource};
pub use service::{GroupLedgerService, ServiceError};
