//! Value object trait: equality by value, not identity.
//!
//! Every record passed to a calculation is a value object. It is built by the
//! caller, read by the calculation, and never stored between calls.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Calculations take
/// them by shared reference and never modify them, so calling an operation
/// twice with the same records yields the same result.
///
/// The trait requires:
/// - **Clone**: records are plain data and cheap to copy
/// - **PartialEq**: two records with the same fields are the same record
/// - **Debug**: records show up in `tracing` fields and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct InventoryItem {
///     quantity: f64,
///     unit_cost: f64,
/// }
///
/// impl ValueObject for InventoryItem {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
