//! replica_core - Deep cloning engine for cyclic object graphs.
//!
//! Given an arbitrary object graph — shared nodes, back-edges, jagged
//! sequences, opted-out members — produce a structurally independent copy
//! that preserves value semantics, reference sharing and cycles.
//!
//! # Architecture
//!
//! - [`TypeKind`] classifies every cloneable type into one of four copy
//!   disciplines: scalar, sequence, value, reference.
//! - [`Member`] / [`MemberPlan`] describe which members a struct transfers
//!   and whether each is deep-cloned or shared ([`Structure`] is the
//!   enumeration the `#[derive(Reflect)]` macro implements).
//! - [`strategy`] folds a member plan into a clone procedure per concrete
//!   type, compiled on first encounter and published into a process-wide
//!   cache. Racing compilations are harmless; one result is retained.
//! - [`deep_clone`] owns the per-call [`Visited`] table. [`Handle`] clones
//!   register themselves there *before* descending into their members,
//!   which is what terminates cycles and preserves sharing.
//!
//! # Reference semantics
//!
//! [`Handle<T>`](Handle) is the engine's reference type (shared, mutable,
//! with observable identity); [`WeakHandle<T>`](WeakHandle) is the
//! non-owning back-edge. Everything else copies by value. Members marked
//! `#[reflect(shallow)]` are transferred with a plain `Clone`, so handles
//! stay shared between original and clone.
//!
//! # Example
//!
//! ```
//! use replica_core::{deep_clone, Handle, Reflect, WeakHandle};
//!
//! #[derive(Default, Reflect)]
//! struct Node {
//!     name: String,
//!     children: Vec<Handle<Node>>,
//!     parent: WeakHandle<Node>,
//! }
//!
//! let root = Handle::new(Node { name: "root".into(), ..Node::default() });
//! let leaf = Handle::new(Node {
//!     name: "leaf".into(),
//!     parent: root.downgrade(),
//!     ..Node::default()
//! });
//! root.borrow_mut().children.push(leaf);
//!
//! let copy = deep_clone(&root);
//! assert!(!Handle::ptr_eq(&root, &copy));
//!
//! // The cloned child's back-edge points at the cloned root, not the
//! // original: the cycle was re-established inside the copy.
//! let back = copy.borrow().children[0].borrow().parent.upgrade().unwrap();
//! assert!(Handle::ptr_eq(&back, &copy));
//! ```

pub mod strategy;

mod engine;
mod handle;
mod kind;
mod plan;
mod reflect;
mod visited;

pub use engine::{deep_clone, DeepClone};
pub use handle::{Handle, WeakHandle};
pub use kind::TypeKind;
pub use plan::{CopyPolicy, Member, MemberPlan, Structure};
pub use reflect::Reflect;
pub use visited::Visited;

// Derive macro: `#[derive(Reflect)]` with the `#[reflect(shallow)]`
// member marker. Shares the trait's name, serde-style.
pub use replica_macros::Reflect;
