//! `fairshare-expenses` — the split allocator and the expense record.
//!
//! [`allocate`] turns one expense's amount plus a split mode into per-member
//! shares that sum exactly to the amount. [`ExpenseRecord`] is the immutable
//! financial event built on top of it; once constructed it is never edited,
//! only deleted. Both are pure: no I/O, no ambient state.

pub mod record;
pub mod split;

pub use record::{ExpenseKind, ExpenseRecord, NewExpense};
pub use split::{allocate, SplitInput, SplitMode};
