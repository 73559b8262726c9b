//! Derivation rules: obtaining `combine` and `identity` for a type `S`
//! from a **role** structure `R` that is a [`Monoid`] and a
//! [`Wrapper`].
//!
//! Two shapes are recognised:
//!
//! - **Self wrapper** ([`derive_from_self_wrapper`]): `R` wraps `S`
//!   itself. `bool` with role [`Or`](crate::Or) is the canonical case:
//!
//!   ```text
//!   a <> b   = (R(a) <> R(b)).into_inner()
//!   identity = R::identity().into_inner()
//!   ```
//!
//! - **Double wrapper** ([`derive_from_double_wrapper`]): `S` is itself
//!   a wrapper and `R` wraps the same type as `S` does:
//!
//!   ```text
//!   a <> b   = S((R(a.get()) <> R(b.get())).into_inner())
//!   identity = S(R::identity().into_inner())
//!   ```
//!
//! Both rules also work with a role that is only a [`Semigroup`]
//! (such as [`First`](crate::First) or [`Last`](crate::Last)):
//! [`derive_semigroup_from_self_wrapper`] and
//! [`derive_semigroup_from_double_wrapper`] synthesize `combine` alone.
//!
//! Which rule applies is chosen explicitly by the implementor: there
//! is no automatic resolution, and an implementation written by hand
//! is simply one that does not call either constructor. Each
//! [`Semiring`](crate::Semiring) role may use a different rule.
//!
//! # Example
//!
//! ```rust
//! use abstract_core::{derive_from_double_wrapper, Magma, Max, Monoid, Semigroup, Wrapper};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct HighWater(u32);
//!
//! impl Wrapper for HighWater {
//!     type Wrapped = u32;
//!     fn wrap(value: u32) -> Self { HighWater(value) }
//!     fn get(&self) -> &u32 { &self.0 }
//!     fn into_inner(self) -> u32 { self.0 }
//! }
//!
//! impl Magma for HighWater {
//!     fn combine(&self, other: &Self) -> Self {
//!         derive_from_double_wrapper::<Self, Max<u32>>().combine(self, other)
//!     }
//! }
//!
//! impl Semigroup for HighWater {}
//!
//! impl Monoid for HighWater {
//!     fn identity() -> Self {
//!         derive_from_double_wrapper::<Self, Max<u32>>().identity()
//!     }
//! }
//!
//! assert_eq!(HighWater(3).combine(&HighWater(9)), HighWater(9));
//! assert_eq!(HighWater::identity(), HighWater(0));
//! ```

use std::fmt;

use crate::Monoid;
use crate::Semigroup;
use crate::Wrapper;

/// The operation synthesized for `S` from a [`Semigroup`] role.
pub struct DerivedCombine<S> {
    combine: fn(&S, &S) -> S,
}

impl<S> DerivedCombine<S> {
    /// The synthesized binary operation.
    pub fn combine(&self, left: &S, right: &S) -> S {
        (self.combine)(left, right)
    }

    /// Fold a non-empty iterator with the synthesized operation.
    pub fn combine_all<I>(&self, iter: I) -> Option<S>
    where
        I: IntoIterator<Item = S>,
    {
        iter.into_iter().reduce(|acc, x| self.combine(&acc, &x))
    }
}

impl<S> Clone for DerivedCombine<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for DerivedCombine<S> {}

impl<S> fmt::Debug for DerivedCombine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedCombine")
            .field("structure", &std::any::type_name::<S>())
            .finish()
    }
}

/// The operations synthesized for `S` by one of the derivation rules.
///
/// A `Derived<S>` is a plain pair of function pointers; it is `Copy`
/// and can be built inline wherever an operation is needed.
pub struct Derived<S> {
    combine: fn(&S, &S) -> S,
    identity: fn() -> S,
}

impl<S> Derived<S> {
    /// The synthesized binary operation.
    pub fn combine(&self, left: &S, right: &S) -> S {
        (self.combine)(left, right)
    }

    /// The synthesized identity element.
    pub fn identity(&self) -> S {
        (self.identity)()
    }

    /// Fold an iterator with the synthesized operation, starting from
    /// the synthesized identity.
    pub fn concat<I>(&self, iter: I) -> S
    where
        I: IntoIterator<Item = S>,
    {
        iter.into_iter()
            .fold(self.identity(), |acc, x| self.combine(&acc, &x))
    }
}

impl<S> Clone for Derived<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Derived<S> {}

impl<S> fmt::Debug for Derived<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("structure", &std::any::type_name::<S>())
            .finish()
    }
}

/// Derive `S`'s operations from a role `R` that wraps `S` itself.
pub fn derive_from_self_wrapper<S, R>() -> Derived<S>
where
    S: Clone,
    R: Monoid + Wrapper<Wrapped = S>,
{
    Derived {
        combine: self_wrapper_combine::<S, R>,
        identity: self_wrapper_identity::<S, R>,
    }
}

/// Derive `S`'s operations from a role `R` that wraps the same type as
/// `S` does.
pub fn derive_from_double_wrapper<S, R>() -> Derived<S>
where
    S: Wrapper,
    S::Wrapped: Clone,
    R: Monoid + Wrapper<Wrapped = S::Wrapped>,
{
    Derived {
        combine: double_wrapper_combine::<S, R>,
        identity: double_wrapper_identity::<S, R>,
    }
}

/// Derive `S`'s `combine` from a semigroup role `R` that wraps `S`
/// itself.
pub fn derive_semigroup_from_self_wrapper<S, R>() -> DerivedCombine<S>
where
    S: Clone,
    R: Semigroup + Wrapper<Wrapped = S>,
{
    DerivedCombine {
        combine: self_wrapper_combine::<S, R>,
    }
}

/// Derive `S`'s `combine` from a semigroup role `R` that wraps the same
/// type as `S` does.
pub fn derive_semigroup_from_double_wrapper<S, R>() -> DerivedCombine<S>
where
    S: Wrapper,
    S::Wrapped: Clone,
    R: Semigroup + Wrapper<Wrapped = S::Wrapped>,
{
    DerivedCombine {
        combine: double_wrapper_combine::<S, R>,
    }
}

fn self_wrapper_combine<S, R>(left: &S, right: &S) -> S
where
    S: Clone,
    R: Semigroup + Wrapper<Wrapped = S>,
{
    R::wrap(left.clone())
        .combine(&R::wrap(right.clone()))
        .into_inner()
}

fn self_wrapper_identity<S, R>() -> S
where
    R: Monoid + Wrapper<Wrapped = S>,
{
    R::identity().into_inner()
}

fn double_wrapper_combine<S, R>(left: &S, right: &S) -> S
where
    S: Wrapper,
    S::Wrapped: Clone,
    R: Semigroup + Wrapper<Wrapped = S::Wrapped>,
{
    let combined = R::wrap(left.get().clone()).combine(&R::wrap(right.get().clone()));
    S::wrap(combined.into_inner())
}

fn double_wrapper_identity<S, R>() -> S
where
    S: Wrapper,
    R: Monoid + Wrapper<Wrapped = S::Wrapped>,
{
    S::wrap(R::identity().into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Add, And, First, Last, Max, Multiply, Or};

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Meters(u64);

    crate::wrapper::impl_wrapper!(Meters => u64);

    #[test]
    fn self_wrapper_uses_role_operation() {
        let or = derive_from_self_wrapper::<bool, Or>();
        assert!(or.combine(&false, &true));
        assert!(!or.identity());

        let and = derive_from_self_wrapper::<bool, And>();
        assert!(!and.combine(&false, &true));
        assert!(and.identity());
    }

    #[test]
    fn self_wrapper_over_integers() {
        let add = derive_from_self_wrapper::<i32, Add<i32>>();
        assert_eq!(add.combine(&3, &5), 8);
        assert_eq!(add.identity(), 0);

        let mul = derive_from_self_wrapper::<i32, Multiply<i32>>();
        assert_eq!(mul.combine(&3, &5), 15);
        assert_eq!(mul.identity(), 1);
    }

    #[test]
    fn double_wrapper_rewraps_into_enclosing_type() {
        let add = derive_from_double_wrapper::<Meters, Add<u64>>();
        assert_eq!(add.combine(&Meters(2), &Meters(40)), Meters(42));
        assert_eq!(add.identity(), Meters(0));

        let max = derive_from_double_wrapper::<Meters, Max<u64>>();
        assert_eq!(max.combine(&Meters(2), &Meters(40)), Meters(40));
        assert_eq!(max.identity(), Meters(u64::MIN));
    }

    #[test]
    fn derived_concat_folds_from_identity() {
        let add = derive_from_double_wrapper::<Meters, Add<u64>>();
        assert_eq!(add.concat([Meters(1), Meters(2), Meters(3)]), Meters(6));
        assert_eq!(add.concat(Vec::new()), Meters(0));
    }

    #[test]
    fn semigroup_roles_derive_combine_only() {
        let first = derive_semigroup_from_self_wrapper::<i32, First<i32>>();
        let last = derive_semigroup_from_self_wrapper::<i32, Last<i32>>();
        assert_eq!(first.combine(&1, &2), 1);
        assert_eq!(last.combine(&1, &2), 2);
        assert_eq!(last.combine_all([4, 5, 6]), Some(6));
        assert_eq!(first.combine_all(Vec::new()), None);

        let earliest = derive_semigroup_from_double_wrapper::<Meters, First<u64>>();
        assert_eq!(earliest.combine(&Meters(7), &Meters(3)), Meters(7));
    }

    #[test]
    fn semigroup_rule_agrees_with_monoid_rule_on_combine() {
        let full = derive_from_double_wrapper::<Meters, Max<u64>>();
        let partial = derive_semigroup_from_double_wrapper::<Meters, Max<u64>>();
        for (a, b) in [(0, 9), (9, 0), (5, 5)] {
            assert_eq!(
                full.combine(&Meters(a), &Meters(b)),
                partial.combine(&Meters(a), &Meters(b))
            );
        }
    }
}
