//! Ordered column/value extraction for downstream persistence code.

use crate::value::Value;

/// Extracts ordered column-name and value lists from a tagged instance.
///
/// Implemented by `#[derive(Persist)]` over `#[persist(column = "...")]`
/// fields, in declaration order. The `persist` attribute namespace is
/// independent of `mapping`: a field may carry either, both or neither,
/// and this trait plays no part in decoding.
pub trait Persist {
    /// Column names, one per tagged field, in declaration order.
    fn persist_columns() -> Vec<&'static str>;

    /// Current field values, in the same order as
    /// [`persist_columns`](Persist::persist_columns).
    fn persist_values(&self) -> Vec<Value>;
}
