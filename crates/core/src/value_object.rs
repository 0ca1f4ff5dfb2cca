//! Value object trait: equality by value, not identity.

/// Marker trait for immutable, value-compared domain objects.
///
/// A share allocation or a balance snapshot has no identity of its own — two
/// snapshots holding the same numbers are the same snapshot. "Modifying" a
/// value object means building a new one; once handed out it never changes.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Allocation(HashMap<MemberId, i64>);
///
/// impl ValueObject for Allocation {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
