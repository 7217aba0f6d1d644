//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attribute values are the same value. Filter criteria are the
/// canonical example here: a request's criteria have no identity of their own.
///
/// The bounds keep value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
