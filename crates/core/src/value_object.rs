//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two values with the same attributes are
/// the same value. Item categories are the typical example here, derived from
/// a name and compared by variant.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Category { Normal, Conjured }
///
/// impl ValueObject for Category {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
