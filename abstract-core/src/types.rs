//! Newtype conformances.
//!
//! Each type here lifts a plain value type into one specific
//! structure. All of them are [`Wrapper`]s, so they can serve as a
//! role for the [`derivation`](crate::derivation) rules.
//!
//! | type           | combine            | identity        | strongest contract     |
//! |----------------|--------------------|-----------------|------------------------|
//! | [`Add<A>`]      | wrapping `+`       | `0`             | `CommutativeMonoid`    |
//! | [`Multiply<A>`] | wrapping `*`       | `1`             | `CommutativeMonoid`    |
//! | [`Max<A>`]      | `max`              | `A::min_value()`| `BoundedSemilattice`   |
//! | [`Min<A>`]      | `min`              | `A::max_value()`| `BoundedSemilattice`   |
//! | [`Or`]          | `\|\|`             | `false`         | `BoundedSemilattice`   |
//! | [`And`]         | `&&`               | `true`          | `BoundedSemilattice`   |
//! | [`First<A>`]    | keep left          | —               | `Semigroup`            |
//! | [`Last<A>`]     | keep right         | —               | `Semigroup`            |
//!
//! [`Multiset<A>`] is not a wrapper: it is a commutative monoid of
//! element counts. [`NonEmptyVec<A>`] is a semigroup under
//! concatenation with no identity, since the empty sequence is not
//! one of its values.
use std::collections::BTreeMap;

use num_traits::{Bounded, One, WrappingAdd, WrappingMul, Zero};

use crate::wrapper::impl_wrapper;
use crate::{BoundedSemilattice, CommutativeMonoid, Magma, Monoid, Semigroup};

// combine = +

/// Newtype wrapper turning a number into a **monoid under addition**.
///
/// Addition wraps on overflow so that `combine` stays total; the laws
/// hold in the ring of integers modulo `2^bits`.
///
/// # Example
///
/// ```rust
/// use abstract_core::{Add, Magma, Monoid};
///
/// assert_eq!(Add(3).combine(&Add(5)), Add(8));
/// assert_eq!(Add::<i32>::identity(), Add(0));
/// assert_eq!(Add(i8::MAX).combine(&Add(1)), Add(i8::MIN));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Add<A>(pub A);

impl_wrapper!(Add<A> => A);

impl<A: WrappingAdd> Magma for Add<A> {
    fn combine(&self, other: &Self) -> Self {
        Add(self.0.wrapping_add(&other.0))
    }
}

impl<A: WrappingAdd> Semigroup for Add<A> {}

impl<A: WrappingAdd + Zero> Monoid for Add<A> {
    fn identity() -> Self {
        Add(A::zero())
    }
}

impl<A: WrappingAdd + Zero> CommutativeMonoid for Add<A> {}

// combine = *

/// Newtype wrapper turning a number into a **monoid under
/// multiplication**. Multiplication wraps on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiply<A>(pub A);

impl_wrapper!(Multiply<A> => A);

impl<A: WrappingMul> Magma for Multiply<A> {
    fn combine(&self, other: &Self) -> Self {
        Multiply(self.0.wrapping_mul(&other.0))
    }
}

impl<A: WrappingMul> Semigroup for Multiply<A> {}

impl<A: WrappingMul + One> Monoid for Multiply<A> {
    fn identity() -> Self {
        Multiply(A::one())
    }
}

impl<A: WrappingMul + One> CommutativeMonoid for Multiply<A> {}

// combine = max

/// Newtype wrapper turning an `Ord` type into a **max-semilattice**.
///
/// When `A: Bounded`, the identity is `Max(A::min_value())`.
///
/// # Example
///
/// ```rust
/// use abstract_core::{Magma, Max, Monoid};
///
/// assert_eq!(Max(3).combine(&Max(7)), Max(7));
/// assert_eq!(Max::<i64>::identity(), Max(i64::MIN));
/// assert_eq!(Max(7).combine(&Max(7)), Max(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

impl_wrapper!(Max<A> => A);

impl<A: Ord + Clone> Magma for Max<A> {
    fn combine(&self, other: &Self) -> Self {
        if self.0 >= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<A: Ord + Clone> Semigroup for Max<A> {}

impl<A: Ord + Clone + Bounded> Monoid for Max<A> {
    fn identity() -> Self {
        Max(A::min_value())
    }
}

impl<A: Ord + Clone + Bounded> CommutativeMonoid for Max<A> {}

impl<A: Ord + Clone + Bounded> BoundedSemilattice for Max<A> {}

// combine = min

/// Newtype wrapper turning an `Ord` type into a **min-semilattice**.
///
/// When `A: Bounded`, the identity is `Min(A::max_value())`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

impl_wrapper!(Min<A> => A);

impl<A: Ord + Clone> Magma for Min<A> {
    fn combine(&self, other: &Self) -> Self {
        if self.0 <= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<A: Ord + Clone> Semigroup for Min<A> {}

impl<A: Ord + Clone + Bounded> Monoid for Min<A> {
    fn identity() -> Self {
        Min(A::max_value())
    }
}

impl<A: Ord + Clone + Bounded> CommutativeMonoid for Min<A> {}

impl<A: Ord + Clone + Bounded> BoundedSemilattice for Min<A> {}

// combine = OR

/// Newtype wrapper for `bool` where `combine` is logical OR.
///
/// This is the additive role of the boolean [`Semiring`](crate::Semiring).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or(pub bool);

impl_wrapper!(Or => bool);

impl Magma for Or {
    fn combine(&self, other: &Self) -> Self {
        Or(self.0 || other.0)
    }
}

impl Semigroup for Or {}

impl Monoid for Or {
    fn identity() -> Self {
        Or(false)
    }
}

impl CommutativeMonoid for Or {}

impl BoundedSemilattice for Or {}

// combine = AND

/// Newtype wrapper for `bool` where `combine` is logical AND.
///
/// This is the multiplicative role of the boolean
/// [`Semiring`](crate::Semiring).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct And(pub bool);

impl_wrapper!(And => bool);

impl Magma for And {
    fn combine(&self, other: &Self) -> Self {
        And(self.0 && other.0)
    }
}

impl Semigroup for And {}

impl Monoid for And {
    fn identity() -> Self {
        And(true)
    }
}

impl CommutativeMonoid for And {}

impl BoundedSemilattice for And {}

// combine = keep left / keep right

/// Semigroup that keeps its left operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<A>(pub A);

impl_wrapper!(First<A> => A);

impl<A: Clone> Magma for First<A> {
    fn combine(&self, _other: &Self) -> Self {
        self.clone()
    }
}

impl<A: Clone> Semigroup for First<A> {}

/// Semigroup that keeps its right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<A>(pub A);

impl_wrapper!(Last<A> => A);

impl<A: Clone> Magma for Last<A> {
    fn combine(&self, other: &Self) -> Self {
        other.clone()
    }
}

impl<A: Clone> Semigroup for Last<A> {}

// combine = multiset sum

/// A finite **multiset**: combine adds multiplicities.
///
/// Unlike set union this is not idempotent, so `Multiset` is a
/// commutative monoid but not a semilattice.
///
/// # Example
///
/// ```rust
/// use abstract_core::{Magma, Multiset};
///
/// let a: Multiset<char> = "abb".chars().collect();
/// let b: Multiset<char> = "bc".chars().collect();
/// let ab = a.combine(&b);
/// assert_eq!(ab.count(&'b'), 3);
/// assert_eq!(ab.len(), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Multiset<A: Ord> {
    counts: BTreeMap<A, usize>,
}

impl<A: Ord> Multiset<A> {
    /// An empty multiset.
    pub fn new() -> Self {
        Multiset {
            counts: BTreeMap::new(),
        }
    }

    /// Add one occurrence of `value`.
    pub fn insert(&mut self, value: A) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Number of occurrences of `value`.
    pub fn count(&self, value: &A) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns `true` if no element occurs.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct elements with their multiplicities, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&A, usize)> {
        self.counts.iter().map(|(a, n)| (a, *n))
    }
}

impl<A: Ord> FromIterator<A> for Multiset<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut out = Multiset::new();
        for a in iter {
            out.insert(a);
        }
        out
    }
}

impl<A: Ord + Clone> Magma for Multiset<A> {
    fn combine(&self, other: &Self) -> Self {
        let mut counts = self.counts.clone();
        for (a, n) in &other.counts {
            *counts.entry(a.clone()).or_insert(0) += n;
        }
        Multiset { counts }
    }
}

impl<A: Ord + Clone> Semigroup for Multiset<A> {}

impl<A: Ord + Clone> Monoid for Multiset<A> {
    fn identity() -> Self {
        Multiset::new()
    }
}

impl<A: Ord + Clone> CommutativeMonoid for Multiset<A> {}

// combine = concatenation, no identity

/// A sequence with at least one element.
///
/// # Example
///
/// ```rust
/// use abstract_core::{Magma, NonEmptyVec};
///
/// let a = NonEmptyVec::new(1, vec![2]);
/// let b = NonEmptyVec::singleton(3);
/// assert_eq!(a.combine(&b).into_vec(), vec![1, 2, 3]);
/// assert!(NonEmptyVec::<u8>::from_vec(Vec::new()).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// A sequence starting with `head`.
    pub fn new(head: A, tail: Vec<A>) -> Self {
        NonEmptyVec { head, tail }
    }

    /// A one-element sequence.
    pub fn singleton(head: A) -> Self {
        NonEmptyVec::new(head, Vec::new())
    }

    /// `None` when `values` is empty.
    pub fn from_vec(values: Vec<A>) -> Option<Self> {
        let mut values = values.into_iter();
        let head = values.next()?;
        Some(NonEmptyVec::new(head, values.collect()))
    }

    /// The first element.
    pub fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, never zero.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// The elements as a plain vector.
    pub fn into_vec(self) -> Vec<A> {
        let mut out = Vec::with_capacity(1 + self.tail.len());
        out.push(self.head);
        out.extend(self.tail);
        out
    }
}

impl<A: Clone> Magma for NonEmptyVec<A> {
    fn combine(&self, other: &Self) -> Self {
        let mut tail = Vec::with_capacity(self.tail.len() + other.len());
        tail.extend(self.tail.iter().cloned());
        tail.extend(other.iter().cloned());
        NonEmptyVec {
            head: self.head.clone(),
            tail,
        }
    }
}

impl<A: Clone> Semigroup for NonEmptyVec<A> {}
