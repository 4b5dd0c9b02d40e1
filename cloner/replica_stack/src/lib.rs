//! Stack safety utilities for deep object-graph recursion.
//!
//! Cloning walks an object graph on the plain call stack: every reference
//! descent is a nested call. Graphs are data, so their depth is decided at
//! run time — a linked structure a few hundred thousand nodes long would
//! overflow a default thread stack long before it exhausted memory. This
//! crate grows the stack on demand instead.
//!
//! # Platform Support
//!
//! - **Native targets**: uses the `stacker` crate to grow the stack when the
//!   remaining headroom drops below the red zone.
//! - **WASM targets**: no-op passthrough (WASM manages its own stack).
//!
//! # Usage
//!
//! Wrap each recursive descent that tracks graph depth:
//!
//! ```text
//! fn clone_node(&self, visited: &mut Visited) -> Self {
//!     with_stack_headroom(|| {
//!         // ... clone members, possibly descending further ...
//!     })
//! }
//! ```

/// Minimum stack space to keep available (64KB red zone).
///
/// Clone frames are small; if less than this remains we grow before
/// descending into the next reference.
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (2MB).
///
/// Sized so a single growth covers tens of thousands of additional
/// descent frames.
const STACK_PER_DESCENT: usize = 2 * 1024 * 1024;

/// Run `f` with enough stack headroom for another stretch of descents.
///
/// If the remaining stack is inside the red zone, a new segment is
/// allocated and `f` runs on it; otherwise `f` runs in place. The check is
/// a pointer comparison, cheap enough for every reference descent.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_DESCENT, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Link {
        next: Option<Box<Link>>,
    }

    fn chain(length: usize) -> Link {
        let mut head = Link { next: None };
        for _ in 0..length {
            head = Link {
                next: Some(Box::new(head)),
            };
        }
        head
    }

    fn depth(link: &Link) -> usize {
        with_stack_headroom(|| match link.next {
            None => 0,
            Some(ref next) => depth(next) + 1,
        })
    }

    // Drop glue recurses through the chain and is not headroom-guarded;
    // unlink iteratively before the nodes go out of scope.
    fn dismantle(mut head: Link) {
        let mut cursor = head.next.take();
        while let Some(mut link) = cursor {
            cursor = link.next.take();
        }
    }

    #[test]
    fn shallow_chain() {
        let head = chain(10);
        assert_eq!(depth(&head), 10);
    }

    #[test]
    fn chain_deeper_than_a_default_stack() {
        // 200k frames would overflow a typical 8MB thread stack.
        let head = chain(200_000);
        assert_eq!(depth(&head), 200_000);
        dismantle(head);
    }

    #[test]
    fn returns_closure_result() {
        let result = with_stack_headroom(|| 42);
        assert_eq!(result, 42);
    }
}
