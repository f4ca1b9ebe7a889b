//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: an expense split
/// or a pairwise balance is fully described by its fields. To "modify" one,
/// build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Balance {
///     debtor: ParticipantId,
///     creditor: ParticipantId,
///     amount: f64,
/// }
///
/// impl ValueObject for Balance {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for crate::id::ParticipantId {}
