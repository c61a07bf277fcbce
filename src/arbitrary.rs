//! A [`proptest`] strategy for generating arbitrary [`Vector`] values, feature-gated the same
//! way the rest of this corpus exposes strategies for its own value types.

use proptest::collection::{vec, SizeRange};
use proptest::strategy::Strategy;

use crate::vector::Vector;

/// A strategy producing a `Vector<T>` whose elements are drawn from `element` and whose length
/// falls in `size`.
pub fn vector<T: Clone + std::fmt::Debug>(
    element: impl Strategy<Value = T>,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = Vector<T>> {
    vec(element, size).prop_map(|xs| xs.into_iter().collect())
}
