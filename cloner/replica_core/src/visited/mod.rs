//! The per-call identity table.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{Handle, Reflect};

/// Map from original-node identity to its already-created clone.
///
/// One table lives for exactly one top-level
/// [`deep_clone`](crate::deep_clone) call and is dropped when it returns;
/// calls never share identity state. The protocol every reference type
/// follows:
///
/// 1. [`lookup`](Visited::lookup) the original. A hit is returned as-is —
///    this is what preserves sharing and terminates cycles.
/// 2. On a miss, allocate the clone slot, [`register`](Visited::register)
///    it, and only then descend into members. A back-edge reached during
///    that descent finds the slot, possibly before it is fully populated.
///
/// The table holds a strong handle to every clone it has seen, so clones
/// reachable only through weak edges stay alive until the call returns.
pub struct Visited {
    slots: FxHashMap<usize, Rc<dyn Any>>,
}

impl Visited {
    /// Fresh table for one clone call.
    pub fn new() -> Self {
        Visited {
            slots: FxHashMap::default(),
        }
    }

    /// Number of registered clones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The clone registered for `original`, if any.
    pub fn lookup<T: Reflect>(&self, original: &Handle<T>) -> Option<Handle<T>> {
        let slot = self.slots.get(&original.identity())?;
        let cell = Rc::clone(slot).downcast::<RefCell<T>>().ok()?;
        Some(Handle::from_cell(cell))
    }

    /// Register `clone` as the copy of `original`. Must happen before the
    /// clone's members are descended into.
    pub fn register<T: Reflect>(&mut self, original: &Handle<T>, clone: &Handle<T>) {
        self.slots.insert(original.identity(), clone.as_any_cell());
    }
}

impl Default for Visited {
    fn default() -> Self {
        Visited::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
