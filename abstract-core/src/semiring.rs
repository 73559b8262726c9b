//! # Semiring
//!
//! A semiring is a type with two composition operations, called
//! *addition* (`<>+`, here [`Semiring::add_combine`]) and
//! *multiplication* (`<>*`, here [`Semiring::multiply_combine`]). Each
//! refers to a distinct structure, named by an associated type:
//!
//! - [`Semiring::Additive`] is a [`CommutativeMonoid`]; its identity is
//!   [`Semiring::zero`].
//! - [`Semiring::Multiplicative`] is a [`Monoid`]; its identity is
//!   [`Semiring::one`].
//!
//! On top of the laws of those two structures:
//!
//! - multiplication distributes over addition on both sides:
//!   - `a <>* (b <>+ c) == (a <>* b) <>+ (a <>* c)`
//!   - `(b <>+ c) <>* a == (b <>* a) <>+ (c <>* a)`
//! - `zero` annihilates under multiplication on both sides:
//!   - `zero <>* a == a <>* zero == zero`
//!
//! Multiplication need not be commutative, so both sides are checked
//! independently (see [`law::distributivity`](crate::law::distributivity)).
//!
//! ## Deriving the operations
//!
//! When a role is a [`Wrapper`](crate::Wrapper) of the semiring type
//! itself, or of the same type the semiring wraps, its operations come
//! for free from [`derive_from_self_wrapper`] or
//! [`derive_from_double_wrapper`](crate::derive_from_double_wrapper).
//! The choice is made per role:
//!
//! ```rust
//! use abstract_core::{derive_from_double_wrapper, And, Or, Semiring};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Reachable(bool);
//! # impl abstract_core::Wrapper for Reachable {
//! #     type Wrapped = bool;
//! #     fn wrap(value: bool) -> Self { Reachable(value) }
//! #     fn get(&self) -> &bool { &self.0 }
//! #     fn into_inner(self) -> bool { self.0 }
//! # }
//!
//! impl Semiring for Reachable {
//!     type Additive = Or;
//!     type Multiplicative = And;
//!
//!     // Additive role: double wrapper (Reachable and Or both wrap bool).
//!     fn add_combine(&self, other: &Self) -> Self {
//!         derive_from_double_wrapper::<Self, Or>().combine(self, other)
//!     }
//!     fn zero() -> Self {
//!         derive_from_double_wrapper::<Self, Or>().identity()
//!     }
//!
//!     // Multiplicative role: written by hand.
//!     fn multiply_combine(&self, other: &Self) -> Self {
//!         Reachable(self.0 && other.0)
//!     }
//!     fn one() -> Self {
//!         Reachable(true)
//!     }
//! }
//!
//! assert_eq!(Reachable::zero(), Reachable(false));
//! assert_eq!(Reachable(true).add_combine(&Reachable(false)), Reachable(true));
//! ```

use crate::derivation::derive_from_self_wrapper;
use crate::{Add, And, CommutativeMonoid, Monoid, Multiply, Or};

/// A type with an additive commutative monoid and a multiplicative
/// monoid that distribute.
pub trait Semiring: Sized {
    /// The structure whose operation is addition.
    type Additive: CommutativeMonoid;
    /// The structure whose operation is multiplication.
    type Multiplicative: Monoid;

    /// `self <>+ other`.
    fn add_combine(&self, other: &Self) -> Self;

    /// `self <>* other`.
    fn multiply_combine(&self, other: &Self) -> Self;

    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Sum an iterator, starting from [`Semiring::zero`].
    fn sum<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::zero(), |acc, x| acc.add_combine(&x))
    }

    /// Multiply an iterator, starting from [`Semiring::one`].
    fn product<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::one(), |acc, x| acc.multiply_combine(&x))
    }
}

/// Booleans: OR is addition, AND is multiplication.
impl Semiring for bool {
    type Additive = Or;
    type Multiplicative = And;

    fn add_combine(&self, other: &Self) -> Self {
        derive_from_self_wrapper::<Self, Self::Additive>().combine(self, other)
    }

    fn multiply_combine(&self, other: &Self) -> Self {
        derive_from_self_wrapper::<Self, Self::Multiplicative>().combine(self, other)
    }

    fn zero() -> Self {
        derive_from_self_wrapper::<Self, Self::Additive>().identity()
    }

    fn one() -> Self {
        derive_from_self_wrapper::<Self, Self::Multiplicative>().identity()
    }
}

/// The additive half of a [`Semiring`], written by hand.
///
/// `#[derive(Semiring)]` delegates to this trait when the attribute
/// leaves out `additive(..)`.
pub trait SemiringAddition: Sized {
    /// The structure whose operation is addition.
    type Role: CommutativeMonoid;

    /// `self <>+ other`.
    fn plus(&self, other: &Self) -> Self;

    /// The additive identity.
    fn additive_identity() -> Self;
}

/// The multiplicative half of a [`Semiring`], written by hand.
///
/// `#[derive(Semiring)]` delegates to this trait when the attribute
/// leaves out `multiplicative(..)`.
pub trait SemiringMultiplication: Sized {
    /// The structure whose operation is multiplication.
    type Role: Monoid;

    /// `self <>* other`.
    fn times(&self, other: &Self) -> Self;

    /// The multiplicative identity.
    fn multiplicative_identity() -> Self;
}

// Integers modulo 2^bits: wrapping + and *.

macro_rules! impl_integer_semiring {
    ( $( $t:ty ),+ ) => {
        $(
            impl Semiring for $t {
                type Additive = Add<$t>;
                type Multiplicative = Multiply<$t>;

                fn add_combine(&self, other: &Self) -> Self {
                    derive_from_self_wrapper::<Self, Self::Additive>().combine(self, other)
                }

                fn multiply_combine(&self, other: &Self) -> Self {
                    derive_from_self_wrapper::<Self, Self::Multiplicative>().combine(self, other)
                }

                fn zero() -> Self {
                    derive_from_self_wrapper::<Self, Self::Additive>().identity()
                }

                fn one() -> Self {
                    derive_from_self_wrapper::<Self, Self::Multiplicative>().identity()
                }
            }
        )+
    };
}

impl_integer_semiring!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_roles_are_or_and() {
        assert!(!bool::zero());
        assert!(bool::one());
        assert!(false.add_combine(&true));
        assert!(!false.multiply_combine(&true));
    }

    #[test]
    fn bool_distributes_for_true_false_true() {
        let (a, b, c) = (true, false, true);
        let lhs = a.multiply_combine(&b.add_combine(&c));
        let rhs = a.multiply_combine(&b).add_combine(&a.multiply_combine(&c));
        assert!(lhs);
        assert!(rhs);
    }

    #[test]
    fn integers_use_add_and_multiply() {
        assert_eq!(3i32.add_combine(&5), 8);
        assert_eq!(3i32.multiply_combine(&5), 15);
        assert_eq!(i32::zero(), 0);
        assert_eq!(i32::one(), 1);
        assert_eq!(u8::MAX.add_combine(&1), 0);
    }

    #[test]
    fn sum_and_product_fold_from_identities() {
        assert_eq!(u64::sum([1, 2, 3, 4]), 10);
        assert_eq!(u64::product([1, 2, 3, 4]), 24);
        assert_eq!(u64::sum(Vec::new()), 0);
        assert_eq!(u64::product(Vec::new()), 1);
        assert!(bool::sum([false, false, true]));
        assert!(!bool::product([true, false]));
    }
}
