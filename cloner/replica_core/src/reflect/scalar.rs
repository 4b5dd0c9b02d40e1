//! Scalar passthrough: value-semantics types with no identity.

use crate::{Reflect, TypeKind, Visited};

macro_rules! copy_scalar_reflect {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn kind() -> TypeKind {
                TypeKind::Scalar
            }

            fn clone_with(&self, _visited: &mut Visited) -> Self {
                *self
            }
        }
    )*};
}

copy_scalar_reflect!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

/// Owned text copies its buffer — still value semantics, no identity.
impl Reflect for String {
    fn kind() -> TypeKind {
        TypeKind::Scalar
    }

    fn clone_with(&self, _visited: &mut Visited) -> Self {
        self.clone()
    }
}

/// Borrowed static text is immutable; sharing it risks nothing.
impl Reflect for &'static str {
    fn kind() -> TypeKind {
        TypeKind::Scalar
    }

    fn clone_with(&self, _visited: &mut Visited) -> Self {
        *self
    }
}
