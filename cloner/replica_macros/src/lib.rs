//! Procedural macros for the replica cloning engine.
//!
//! This crate provides the `Reflect` derive macro, which generates the
//! member plan a struct exposes to the cloning engine instead of requiring
//! a hand-written `Structure` implementation.
//!
//! # Reflect Derive
//!
//! ```text
//! #[derive(Default, Reflect)]
//! struct Order {
//!     id: u64,
//!     lines: Vec<String>,
//!     #[reflect(shallow)]
//!     audit_log: Handle<Vec<String>>,
//! }
//! ```
//!
//! Every field is deep-cloned through the engine unless it carries the
//! `#[reflect(shallow)]` marker, in which case the field is transferred
//! with a plain `Clone` (for a `Handle` that shares the allocation rather
//! than copying it).
//!
//! The derive emits implementations of both `Reflect` (routing
//! `clone_with` through the process-wide strategy cache) and `Structure`
//! (the member enumeration the strategy compiler folds into a procedure).

mod reflect;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for cloneable structs.
///
/// # Attributes
///
/// ## Field-level
/// - `#[reflect(shallow)]` - Transfer this field by plain `Clone` instead
///   of deep-cloning it. The sole effect is removing the field from the
///   deep-copy set; shared handles stay shared between original and clone.
///
/// # Requirements
///
/// - The target must be a struct with named fields (unit structs are
///   accepted and have an empty member plan).
/// - The struct must implement `Default`: clones are built by overwriting
///   every member of a default instance, which is what lets a cycle find
///   its (not yet populated) clone.
/// - Deep fields must implement `Reflect`; shallow fields must implement
///   `Clone`.
///
/// # Example
///
/// ```text
/// #[derive(Default, Reflect)]
/// struct Node {
///     name: String,
///     children: Vec<Handle<Node>>,
///     parent: WeakHandle<Node>,
/// }
///
/// let copy = deep_clone(&node);
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
