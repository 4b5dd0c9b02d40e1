//! Shared, mutable graph nodes with observable identity.
//!
//! [`Handle`] is the engine's reference type: the one family of values
//! whose identity the clone must preserve. [`WeakHandle`] is the
//! non-owning back-edge, the idiomatic way to close a cycle without
//! leaking. Everything else in a graph copies by value.

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use replica_stack::with_stack_headroom;

use crate::{Reflect, TypeKind, Visited};

/// Owning shared reference to a graph node.
///
/// Two handles to the same allocation deep-clone to two handles to the
/// same *new* allocation, and a cycle through handles terminates: the
/// clone slot is registered in the visited table before the node's
/// members are populated, so a back-edge finds the slot instead of
/// recursing forever.
///
/// `Clone` on a handle shares the allocation — that is exactly what the
/// `#[reflect(shallow)]` policy transfers. Use
/// [`deep_clone`](crate::deep_clone) for an independent copy.
///
/// Strong cycles keep each other alive in the clone just as they do in
/// the original; prefer [`WeakHandle`] for back-edges.
pub struct Handle<T>(Rc<RefCell<T>>);

impl<T> Handle<T> {
    /// Wrap a fresh node.
    pub fn new(value: T) -> Self {
        Handle(Rc::new(RefCell::new(value)))
    }

    /// Immutably borrow the node.
    ///
    /// # Panics
    /// Panics if the node is currently mutably borrowed, per `RefCell`.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrow the node.
    ///
    /// # Panics
    /// Panics if the node is currently borrowed, per `RefCell`.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles point at the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Non-owning handle to the same node.
    pub fn downgrade(&self) -> WeakHandle<T> {
        WeakHandle(Rc::downgrade(&self.0))
    }

    /// Address of the allocation — the identity the visited table keys on.
    /// Stable for the life of the node, which spans any clone call that
    /// can reach it.
    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl<T: 'static> Handle<T> {
    pub(crate) fn from_cell(cell: Rc<RefCell<T>>) -> Self {
        Handle(cell)
    }

    pub(crate) fn as_any_cell(&self) -> Rc<dyn Any> {
        self.0.clone()
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Handle<T> {
    fn default() -> Self {
        Handle::new(T::default())
    }
}

// Prints the address only: descending into the node would not terminate
// on a cyclic graph.
impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:p})", Rc::as_ptr(&self.0))
    }
}

impl<T: Reflect + Default> Reflect for Handle<T> {
    fn kind() -> TypeKind {
        TypeKind::Reference
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        if let Some(existing) = visited.lookup(self) {
            return existing;
        }
        with_stack_headroom(|| {
            // Register the empty slot before descending so a cycle back to
            // this node resolves to the clone instead of recursing forever.
            // The default payload is fully overwritten before the top-level
            // call returns.
            let slot = Handle::new(T::default());
            visited.register(self, &slot);
            let populated = self.0.borrow().clone_with(visited);
            *slot.0.borrow_mut() = populated;
            slot
        })
    }
}

/// Non-owning reference to a graph node.
///
/// Cloning resolves the target through the visited table, so a back-edge
/// reached from its owner ends up pointing at the owner's clone. A weak
/// handle whose target is gone clones to a dangling handle.
///
/// A target reachable *only* through weak edges is kept alive by the
/// visited table for the duration of the call; once the call returns, its
/// clone is dropped and the cloned weak handle dangles — mirror of the
/// fact that nothing in the copied graph owns it.
pub struct WeakHandle<T>(Weak<RefCell<T>>);

impl<T> WeakHandle<T> {
    /// A dangling handle that upgrades to `None`.
    pub fn new() -> Self {
        WeakHandle(Weak::new())
    }

    /// Strong handle to the target, if it is still alive.
    pub fn upgrade(&self) -> Option<Handle<T>> {
        self.0.upgrade().map(Handle)
    }
}

impl<T> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        WeakHandle(Weak::clone(&self.0))
    }
}

impl<T> Default for WeakHandle<T> {
    fn default() -> Self {
        WeakHandle::new()
    }
}

impl<T> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakHandle({:p})", self.0.as_ptr())
    }
}

impl<T: Reflect + Default> Reflect for WeakHandle<T> {
    fn kind() -> TypeKind {
        TypeKind::Reference
    }

    fn clone_with(&self, visited: &mut Visited) -> Self {
        match self.upgrade() {
            // A dead target clones to a dangling handle.
            None => WeakHandle::new(),
            Some(target) => target.clone_with(visited).downgrade(),
        }
    }
}

#[cfg(test)]
mod tests;
