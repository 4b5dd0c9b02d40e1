//! Transparent wrappers: absence, indirection, small aggregates.

use std::marker::PhantomData;

use replica_stack::with_stack_headroom;

use crate::{Reflect, TypeKind, Visited};

/// Markers carry no data.
impl<T: ?Sized + 'static> Reflect for PhantomData<T> {
    fn kind() -> TypeKind {
        TypeKind::Value
    }

    fn clone_with(&self, _visited: &mut Visited) -> Self {
        PhantomData
    }
}

/// `Option` is the null guard: `None` short-circuits before any element
/// or member procedure runs. Classification defers to the wrapped type —
/// absence is encoded by the wrapper, not by the kind.
impl<V: Reflect> Reflect for Option<V> {
    fn kind() -> TypeKind {
        V::kind()
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        self.as_ref().map(|value| value.clone_with(visited))
    }
}

/// Owned indirection. Boxes chain (lists, trees), so the descent runs
/// with stack headroom.
impl<V: Reflect> Reflect for Box<V> {
    fn kind() -> TypeKind {
        V::kind()
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        with_stack_headroom(|| Box::new((**self).clone_with(visited)))
    }
}

impl<A: Reflect, B: Reflect> Reflect for (A, B) {
    fn kind() -> TypeKind {
        TypeKind::Value
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        (self.0.clone_with(visited), self.1.clone_with(visited))
    }
}

impl<A: Reflect, B: Reflect, C: Reflect> Reflect for (A, B, C) {
    fn kind() -> TypeKind {
        TypeKind::Value
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        (
            self.0.clone_with(visited),
            self.1.clone_with(visited),
            self.2.clone_with(visited),
        )
    }
}
