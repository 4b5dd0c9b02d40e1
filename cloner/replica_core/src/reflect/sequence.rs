//! Sequence cloning: fresh containers, elements cloned in order.
//!
//! Nested sequences clone depth-first, so a jagged matrix is rebuilt
//! row-major: outer elements in order, each row completed before the next
//! begins. Lengths are preserved per dimension by construction. Sequences
//! have value semantics — they are never registered in the visited table;
//! a *shared* sequence is a `Handle<Vec<_>>` and is tracked like any other
//! reference.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::{Reflect, TypeKind, Visited};

impl<V: Reflect> Reflect for Vec<V> {
    fn kind() -> TypeKind {
        TypeKind::Sequence
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        self.iter()
            .map(|element| element.clone_with(visited))
            .collect()
    }
}

impl<V: Reflect, const N: usize> Reflect for [V; N] {
    fn kind() -> TypeKind {
        TypeKind::Sequence
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        std::array::from_fn(|index| self[index].clone_with(visited))
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
    S: BuildHasher + Default + 'static,
{
    fn kind() -> TypeKind {
        TypeKind::Sequence
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        let mut clone = HashMap::with_capacity_and_hasher(self.len(), S::default());
        for (key, value) in self {
            clone.insert(key.clone_with(visited), value.clone_with(visited));
        }
        clone
    }
}
