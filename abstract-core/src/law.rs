//! Context-free law predicates.
//!
//! Each function states one law of one contract over values with
//! direct ([`PartialEq`]) equality and returns whether it holds for the
//! given inputs. The predicates are generic over the contract, never
//! over a concrete type: a structure whose operations were obtained by
//! [`derivation`](crate::derivation) is checked exactly like one
//! written by hand.
//!
//! For function-shaped structures use
//! [`law_in_context`](crate::law_in_context) instead.
//!
//! ```rust
//! use abstract_core::{law, Add, Max};
//!
//! assert!(law::associativity(&Add(2), &Add(3), &Add(4)));
//! assert!(law::identity(&Max(7)));
//! assert!(law::idempotence(&Max(7)));
//! assert!(law::distributivity(&true, &false, &true));
//! ```
use std::fmt;

use crate::{BoundedSemilattice, CommutativeMonoid, Monoid, Semigroup, Semiring};

/// The laws known to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LawKind {
    /// `(a <> b) <> c == a <> (b <> c)`
    Associativity,
    /// `identity <> a == a`
    LeftIdentity,
    /// `a <> identity == a`
    RightIdentity,
    /// `a <> b == b <> a`
    Commutativity,
    /// `a <> a == a`
    Idempotence,
    /// `a <>* (b <>+ c) == (a <>* b) <>+ (a <>* c)`
    LeftDistributivity,
    /// `(b <>+ c) <>* a == (b <>* a) <>+ (c <>* a)`
    RightDistributivity,
    /// `zero <>* a == zero` and `a <>* zero == zero`
    ZeroAnnihilation,
    /// `(a <>+ b) <>+ c == a <>+ (b <>+ c)`
    AdditiveAssociativity,
    /// `zero <>+ a == a == a <>+ zero`
    AdditiveIdentity,
    /// `a <>+ b == b <>+ a`
    AdditiveCommutativity,
    /// `(a <>* b) <>* c == a <>* (b <>* c)`
    MultiplicativeAssociativity,
    /// `one <>* a == a == a <>* one`
    MultiplicativeIdentity,
    /// `f(a <> b) == f(a) <> f(b)` and `f(identity) == identity`
    Homomorphism,
}

impl LawKind {
    /// A short, stable name for reports.
    pub fn name(self) -> &'static str {
        match self {
            LawKind::Associativity => "associativity",
            LawKind::LeftIdentity => "left identity",
            LawKind::RightIdentity => "right identity",
            LawKind::Commutativity => "commutativity",
            LawKind::Idempotence => "idempotence",
            LawKind::LeftDistributivity => "left distributivity",
            LawKind::RightDistributivity => "right distributivity",
            LawKind::ZeroAnnihilation => "zero annihilation",
            LawKind::AdditiveAssociativity => "additive associativity",
            LawKind::AdditiveIdentity => "additive identity",
            LawKind::AdditiveCommutativity => "additive commutativity",
            LawKind::MultiplicativeAssociativity => "multiplicative associativity",
            LawKind::MultiplicativeIdentity => "multiplicative identity",
            LawKind::Homomorphism => "homomorphism",
        }
    }
}

impl fmt::Display for LawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Semigroup

/// `(a <> b) <> c == a <> (b <> c)`
pub fn associativity<T: Semigroup + PartialEq>(a: &T, b: &T, c: &T) -> bool {
    a.combine(b).combine(c) == a.combine(&b.combine(c))
}

// Monoid

/// `identity <> a == a`
pub fn left_identity<T: Monoid + PartialEq>(a: &T) -> bool {
    T::identity().combine(a) == *a
}

/// `a <> identity == a`
pub fn right_identity<T: Monoid + PartialEq>(a: &T) -> bool {
    a.combine(&T::identity()) == *a
}

/// Both identity laws.
pub fn identity<T: Monoid + PartialEq>(a: &T) -> bool {
    left_identity(a) && right_identity(a)
}

// CommutativeMonoid

/// `a <> b == b <> a`
pub fn commutativity<T: CommutativeMonoid + PartialEq>(a: &T, b: &T) -> bool {
    a.combine(b) == b.combine(a)
}

// BoundedSemilattice

/// `a <> a == a`
pub fn idempotence<T: BoundedSemilattice + PartialEq>(a: &T) -> bool {
    a.combine(a) == *a
}

// Semiring

/// `(a <>+ b) <>+ c == a <>+ (b <>+ c)`
pub fn additive_associativity<S: Semiring + PartialEq>(a: &S, b: &S, c: &S) -> bool {
    a.add_combine(b).add_combine(c) == a.add_combine(&b.add_combine(c))
}

/// `zero <>+ a == a == a <>+ zero`
pub fn additive_identity<S: Semiring + PartialEq>(a: &S) -> bool {
    S::zero().add_combine(a) == *a && a.add_combine(&S::zero()) == *a
}

/// `a <>+ b == b <>+ a`
pub fn additive_commutativity<S: Semiring + PartialEq>(a: &S, b: &S) -> bool {
    a.add_combine(b) == b.add_combine(a)
}

/// `(a <>* b) <>* c == a <>* (b <>* c)`
pub fn multiplicative_associativity<S: Semiring + PartialEq>(a: &S, b: &S, c: &S) -> bool {
    a.multiply_combine(b).multiply_combine(c) == a.multiply_combine(&b.multiply_combine(c))
}

/// `one <>* a == a == a <>* one`
pub fn multiplicative_identity<S: Semiring + PartialEq>(a: &S) -> bool {
    S::one().multiply_combine(a) == *a && a.multiply_combine(&S::one()) == *a
}

/// `a <>* (b <>+ c) == (a <>* b) <>+ (a <>* c)`
pub fn left_distributivity<S: Semiring + PartialEq>(a: &S, b: &S, c: &S) -> bool {
    a.multiply_combine(&b.add_combine(c))
        == a.multiply_combine(b).add_combine(&a.multiply_combine(c))
}

/// `(b <>+ c) <>* a == (b <>* a) <>+ (c <>* a)`
pub fn right_distributivity<S: Semiring + PartialEq>(a: &S, b: &S, c: &S) -> bool {
    b.add_combine(c).multiply_combine(a)
        == b.multiply_combine(a).add_combine(&c.multiply_combine(a))
}

/// Multiplication distributes over addition on both sides.
pub fn distributivity<S: Semiring + PartialEq>(a: &S, b: &S, c: &S) -> bool {
    left_distributivity(a, b, c) && right_distributivity(a, b, c)
}

/// `zero <>* a == zero` and `a <>* zero == zero`
pub fn zero_annihilation<S: Semiring + PartialEq>(a: &S) -> bool {
    S::zero().multiply_combine(a) == S::zero() && a.multiply_combine(&S::zero()) == S::zero()
}

// Homomorphism

/// `f` preserves the monoid structure at `a`, `b`:
/// `f(a <> b) == f(a) <> f(b)` and `f(identity) == identity`.
pub fn homomorphism<A, B, F>(f: F, a: &A, b: &A) -> bool
where
    A: Monoid,
    B: Monoid + PartialEq,
    F: Fn(&A) -> B,
{
    f(&a.combine(b)) == f(a).combine(&f(b)) && f(&A::identity()) == B::identity()
}
