//! The clone entry point.

use crate::{Reflect, Visited};

/// Deep-clone the object graph rooted at `original`.
///
/// A fresh visited table is created for this call and dropped when it
/// returns, so two calls never share identity state: reference sharing
/// and cycles are preserved *within* one call, and two calls over the
/// same graph produce fully independent copies. An absent (`None`) root
/// or member comes back absent with no allocation.
///
/// # Example
///
/// ```
/// use replica_core::deep_clone;
///
/// let rows = vec![vec![1, 2, 3], vec![4]];
/// let copy = deep_clone(&rows);
/// assert_eq!(copy, rows);
/// ```
pub fn deep_clone<T: Reflect>(original: &T) -> T {
    let mut visited = Visited::new();
    let clone = original.clone_with(&mut visited);
    tracing::trace!(
        ty = %std::any::type_name::<T>(),
        kind = %T::kind(),
        nodes = visited.len(),
        "deep clone complete"
    );
    clone
}

/// Method-call adapter for [`deep_clone`].
pub trait DeepClone: Sized {
    /// Deep-clone `self` into an independent copy.
    fn deep_clone(&self) -> Self;
}

impl<T: Reflect> DeepClone for T {
    fn deep_clone(&self) -> Self {
        deep_clone(self)
    }
}
