//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a `Category` named "Food" equals every other
///   `Category` named "Food")
/// - **Entity**: has identity (two products with the same id are the same product)
///
/// ## Design Constraints
///
/// - **Clone**: value objects are cheap to copy
/// - **Eq + Hash**: usable as map keys (products are grouped by category)
/// - **Debug**: helpful for logging and tests
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
