#![deny(missing_docs)]
//! # abstract-core: Algebraic contracts with executable laws
//!
//! This crate provides a hierarchy of algebraic structures as Rust
//! traits:
//!
//! - [`Magma`]: closed binary operation, no laws
//! - [`Semigroup`]: magma whose operation is associative
//! - [`Monoid`]: semigroup with identity element
//! - [`CommutativeMonoid`]: monoid with commutative operation
//! - [`BoundedSemilattice`]: commutative monoid with idempotent operation
//! - [`Semiring`]: two coupled structures, an additive commutative
//!   monoid and a multiplicative monoid
//!
//! together with:
//!
//! - [`Wrapper`]: newtypes that own exactly one value of a wrapped type
//! - [`derivation`]: rules that synthesize a structure's operations from
//!   a wrapper role (`derive_from_self_wrapper`,
//!   `derive_from_double_wrapper`)
//! - [`EqualInContext`]: equality for values that can only be observed by
//!   application (functions), decided one context at a time
//! - [`law`] / [`law_in_context`]: each contract's laws as plain
//!   predicates
//! - [`check`] *(feature = "check")*: a `proptest`-backed harness that
//!   feeds arbitrary values (and contexts) into the laws
//!
//! ## Quick start
//!
//! ```rust
//! use abstract_core::{Magma, Monoid, Semigroup, CommutativeMonoid};
//!
//! // Integers under addition form a commutative monoid
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct Sum(i32);
//!
//! impl Magma for Sum {
//!     fn combine(&self, other: &Self) -> Self {
//!         Sum(self.0 + other.0)
//!     }
//! }
//!
//! impl Semigroup for Sum {}
//!
//! impl Monoid for Sum {
//!     fn identity() -> Self {
//!         Sum(0)
//!     }
//! }
//!
//! impl CommutativeMonoid for Sum {}
//!
//! let x = Sum(3);
//! let y = Sum(5);
//! assert_eq!(x.combine(&y), Sum(8));
//! assert_eq!(Sum::identity().combine(&x), x);
//! ```
//!
//! ## Standard library implementations
//!
//! - **[`Vec<T>`]**, **[`String`]**: free monoid (concatenation)
//! - **[`HashSet<T>`](std::collections::HashSet)**,
//!   **[`BTreeSet<T>`](std::collections::BTreeSet)**: bounded
//!   semilattice (union, identity = ∅)
//! - **[`Option<M>`](Option)** (where `M: Semigroup + Clone`): `Monoid`,
//!   `None` is the identity and `Some(a) <> Some(b) = Some(a <> b)`
//! - **[`Ordering`](std::cmp::Ordering)**: monoid with
//!   [`Ordering::then`](std::cmp::Ordering::then) semantics
//! - **`()`** and tuples up to arity 4: componentwise
//! - **`bool`** and the primitive integers: [`Semiring`]
//!
//! Newtype conformances (`Add`, `Multiply`, `Max`, `Min`, `And`, `Or`,
//! `First`, `Last`, `Multiset`) live in [`types`]; function-shaped ones
//! (`Endofunction`, `Function`) live in [`function`].

// Make the current crate visible as `abstract_core` so the derive
// macros that emit `::abstract_core::...` work here and downstream.
extern crate self as abstract_core;

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Synthesis of a structure's operations from a wrapper role.
pub mod derivation;
/// Context-parameterized equality.
pub mod equality;
/// Function-shaped structures.
pub mod function;
/// Context-free law predicates.
pub mod law;
/// Context-threaded law predicates.
pub mod law_in_context;
/// The [`Semiring`] contract and its standard conformances.
pub mod semiring;
/// Newtype conformances.
pub mod types;
/// The [`Wrapper`] capability.
pub mod wrapper;

#[cfg(feature = "check")]
/// Property-based verification of laws, backed by `proptest`.
pub mod check;

pub use derivation::{
    derive_from_double_wrapper, derive_from_self_wrapper, derive_semigroup_from_double_wrapper,
    derive_semigroup_from_self_wrapper, Derived, DerivedCombine,
};
pub use equality::EqualInContext;
pub use function::{Endofunction, Function};
pub use law::LawKind;
pub use semiring::{Semiring, SemiringAddition, SemiringMultiplication};
pub use types::{Add, And, First, Last, Max, Min, Multiply, Multiset, NonEmptyVec, Or};
pub use wrapper::Wrapper;

#[cfg(feature = "derive")]
pub use abstract_core_derive::{
    BoundedSemilattice, CommutativeMonoid, Magma, Monoid, Semigroup, Semiring, Wrapper,
};

/// A **magma**: a type with a closed, total binary operation.
///
/// No laws are required at this level; closure is the only guarantee.
pub trait Magma: Sized {
    /// Compose two elements into a new one.
    fn combine(&self, other: &Self) -> Self;

    /// In-place combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// A **semigroup**: a magma whose operation is associative.
///
/// Laws (not enforced by type system, see [`law::associativity`]):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use abstract_core::{Magma, Semigroup};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Greatest(i32);
///
/// impl Magma for Greatest {
///     fn combine(&self, other: &Self) -> Self {
///         Greatest(self.0.max(other.0))
///     }
/// }
///
/// impl Semigroup for Greatest {}
///
/// let x = Greatest(3);
/// let y = Greatest(5);
/// let z = Greatest(2);
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// assert_eq!(Greatest::combine_all([x, y, z]), Some(Greatest(5)));
/// ```
pub trait Semigroup: Magma {
    /// Fold a non-empty iterator with `combine`. Returns `None` for
    /// empty iterators.
    fn combine_all<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter().reduce(|acc, x| acc.combine(&x))
    }
}

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `identity().combine(a) == a`
/// - **Right identity**: `a.combine(identity()) == a`
///
/// # Example
///
/// ```rust
/// use abstract_core::{Magma, Monoid, Semigroup};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Product(i32);
///
/// impl Magma for Product {
///     fn combine(&self, other: &Self) -> Self {
///         Product(self.0 * other.0)
///     }
/// }
///
/// impl Semigroup for Product {}
///
/// impl Monoid for Product {
///     fn identity() -> Self {
///         Product(1)
///     }
/// }
///
/// let x = Product(3);
/// assert_eq!(x.combine(&Product(5)), Product(15));
/// assert_eq!(Product::identity().combine(&x), x);
/// assert_eq!(x.combine(&Product::identity()), x);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn identity() -> Self;

    /// Fold an iterator using combine, starting from the identity.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::identity(), |acc, x| acc.combine(&x))
    }
}

/// A **commutative monoid**: a monoid where combine is commutative.
///
/// Laws (not enforced by type system):
///
/// - all the [`Monoid`] laws
/// - **Commutative**: `a.combine(b) == b.combine(a)`
pub trait CommutativeMonoid: Monoid {
    // Marker trait - laws are documented above
}

/// A **bounded semilattice**: a commutative monoid where combine is
/// idempotent.
///
/// Laws (not enforced by type system):
///
/// - all the [`CommutativeMonoid`] laws
/// - **Idempotent**: `a.combine(a) == a`
///
/// The identity element is the bottom of the induced order
/// `x ≤ y` iff `x.combine(y) == y`.
///
/// # Example
///
/// ```rust
/// use abstract_core::{BoundedSemilattice, Magma, Monoid};
/// use std::collections::HashSet;
///
/// let a: HashSet<_> = [1, 2].into_iter().collect();
/// let b: HashSet<_> = [2, 3].into_iter().collect();
///
/// assert_eq!(a.combine(&b), [1, 2, 3].into_iter().collect());
/// assert_eq!(a.combine(&a), a);
/// assert!(HashSet::<i32>::identity().leq(&a));
/// ```
pub trait BoundedSemilattice: CommutativeMonoid {
    /// Induced partial order: `x ≤ y` iff `x <> y == y`.
    fn leq(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        self.combine(other) == *other
    }
}

// Free monoids: concatenation

impl<T: Clone> Magma for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }
}

impl<T: Clone> Semigroup for Vec<T> {}

impl<T: Clone> Monoid for Vec<T> {
    fn identity() -> Self {
        Vec::new()
    }
}

impl Magma for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self);
        out.push_str(other);
        out
    }
}

impl Semigroup for String {}

impl Monoid for String {
    fn identity() -> Self {
        String::new()
    }
}

// HashSet: combine = union

impl<T: Eq + Hash + Clone> Magma for HashSet<T> {
    fn combine(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Semigroup for HashSet<T> {}

impl<T: Eq + Hash + Clone> Monoid for HashSet<T> {
    fn identity() -> Self {
        HashSet::new()
    }
}

impl<T: Eq + Hash + Clone> CommutativeMonoid for HashSet<T> {}

impl<T: Eq + Hash + Clone> BoundedSemilattice for HashSet<T> {}

// BTreeSet: combine = union

impl<T: Ord + Clone> Magma for BTreeSet<T> {
    fn combine(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Ord + Clone> Semigroup for BTreeSet<T> {}

impl<T: Ord + Clone> Monoid for BTreeSet<T> {
    fn identity() -> Self {
        BTreeSet::new()
    }
}

impl<T: Ord + Clone> CommutativeMonoid for BTreeSet<T> {}

impl<T: Ord + Clone> BoundedSemilattice for BTreeSet<T> {}

// Option: adjoin an identity to any semigroup

impl<M: Semigroup + Clone> Magma for Option<M> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(a.combine(b)),
        }
    }
}

impl<M: Semigroup + Clone> Semigroup for Option<M> {}

impl<M: Semigroup + Clone> Monoid for Option<M> {
    fn identity() -> Self {
        None
    }
}

impl<M: CommutativeMonoid + Clone> CommutativeMonoid for Option<M> {}

impl<M: BoundedSemilattice + Clone> BoundedSemilattice for Option<M> {}

// Ordering: lexicographic refinement

impl Magma for Ordering {
    fn combine(&self, other: &Self) -> Self {
        self.then(*other)
    }
}

impl Semigroup for Ordering {}

impl Monoid for Ordering {
    fn identity() -> Self {
        Ordering::Equal
    }
}

// Unit type

impl Magma for () {
    fn combine(&self, _other: &Self) -> Self {}
}

impl Semigroup for () {}

impl Monoid for () {
    fn identity() -> Self {}
}

impl CommutativeMonoid for () {}

impl BoundedSemilattice for () {}

// Tuples: product structures

macro_rules! impl_product {
    ( $( $T:ident : $idx:tt ),+ ) => {
        impl<$( $T ),+> Magma for ( $( $T, )+ )
        where
            $( $T: Magma ),+
        {
            fn combine(&self, other: &Self) -> Self {
                (
                    $( self.$idx.combine(&other.$idx), )+
                )
            }
        }

        impl<$( $T ),+> Semigroup for ( $( $T, )+ )
        where
            $( $T: Semigroup ),+
        {
        }

        impl<$( $T ),+> Monoid for ( $( $T, )+ )
        where
            $( $T: Monoid ),+
        {
            fn identity() -> Self {
                (
                    $( $T::identity(), )+
                )
            }
        }

        impl<$( $T ),+> CommutativeMonoid for ( $( $T, )+ )
        where
            $( $T: CommutativeMonoid ),+
        {
        }

        impl<$( $T ),+> BoundedSemilattice for ( $( $T, )+ )
        where
            $( $T: BoundedSemilattice ),+
        {
        }
    }
}

impl_product!(A:0);
impl_product!(A:0, B:1);
impl_product!(A:0, B:1, C:2);
impl_product!(A:0, B:1, C:2, D:3);
