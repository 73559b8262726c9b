//! A **wrapper** is a newtype that exclusively owns one value of a
//! declared wrapped type.
//!
//! Wrappers are how a plain type is lifted into a distinct algebraic
//! structure: `i64` has no single obvious monoid, but
//! [`Add<i64>`](crate::Add) and [`Max<i64>`](crate::Max) each do.
//! The [`derivation`](crate::derivation) rules use this trait to
//! move values in and out of a role structure.
//!
//! Wrappers carry no operations of their own. Equality on a wrapper is
//! expected to be structural: two wrappers are equal iff their wrapped
//! values are (or, for function-shaped wrappers, agree under every
//! context).
//!
//! # Example
//!
//! ```rust
//! use abstract_core::{Max, Wrapper};
//!
//! let m = Max::wrap(7);
//! assert_eq!(*m.get(), 7);
//! assert_eq!(m.into_inner(), 7);
//! ```

/// A newtype that owns exactly one value of type [`Wrapper::Wrapped`].
pub trait Wrapper: Sized {
    /// The type of the owned value.
    type Wrapped;

    /// Construct the wrapper from a value.
    fn wrap(value: Self::Wrapped) -> Self;

    /// Read access to the wrapped value.
    fn get(&self) -> &Self::Wrapped;

    /// Give up the wrapper and return the wrapped value.
    fn into_inner(self) -> Self::Wrapped;

    /// Apply `f` to the wrapped value and re-wrap the result.
    fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(Self::Wrapped) -> Self::Wrapped,
    {
        Self::wrap(f(self.into_inner()))
    }
}

/// Implement [`Wrapper`] for single-field tuple structs `$name<..>(pub T)`.
macro_rules! impl_wrapper {
    ($name:ident < $($p:ident),* > => $wrapped:ty) => {
        impl<$($p),*> $crate::wrapper::Wrapper for $name<$($p),*> {
            type Wrapped = $wrapped;

            fn wrap(value: Self::Wrapped) -> Self {
                $name(value)
            }

            fn get(&self) -> &Self::Wrapped {
                &self.0
            }

            fn into_inner(self) -> Self::Wrapped {
                self.0
            }
        }
    };
    ($name:ident => $wrapped:ty) => {
        impl $crate::wrapper::Wrapper for $name {
            type Wrapped = $wrapped;

            fn wrap(value: Self::Wrapped) -> Self {
                $name(value)
            }

            fn get(&self) -> &Self::Wrapped {
                &self.0
            }

            fn into_inner(self) -> Self::Wrapped {
                self.0
            }
        }
    };
}

pub(crate) use impl_wrapper;
