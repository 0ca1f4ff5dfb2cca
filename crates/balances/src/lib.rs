//! `fairshare-balances` — the balance ledger.
//!
//! Balances are a derived view: every read replays the group's full record
//! history through [`compute_balances`]. Recomputation costs a little, but
//! there is no incrementally-maintained state to drift out of sync.

pub mod ledger;
pub mod snapshot;

pub use ledger::compute_balances;
pub use snapshot::BalanceSnapshot;
