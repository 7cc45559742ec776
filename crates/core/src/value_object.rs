//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by
/// value** - they have no identity of their own. Two value objects whose
/// values compare equal are interchangeable.
///
/// A value object chooses which attributes participate in its equality. An
/// attribute excluded from `PartialEq` is carried data, not identity (e.g. a
/// person's age in a roster keyed by name and surname).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
