//! Context-threaded law predicates.
//!
//! The same laws as [`law`](crate::law), for structures whose equality
//! is only decidable relative to a context ([`EqualInContext`]). Every
//! predicate takes the context as its last argument and answers for
//! that context alone.
//!
//! When a law is a conjunction, every conjunct is evaluated against
//! the context before the results are combined; the predicates never
//! short-circuit.
//!
//! ```rust
//! use abstract_core::{law_in_context, Endofunction};
//!
//! let f = Endofunction::new(|x: i32| x + 1);
//! let g = Endofunction::new(|x: i32| x * 2);
//! let h = Endofunction::new(|x: i32| x - 3);
//!
//! for ctx in [-2, 0, 3] {
//!     assert!(law_in_context::associativity(&f, &g, &h, &ctx));
//!     assert!(law_in_context::identity(&f, &ctx));
//! }
//! ```
use crate::{BoundedSemilattice, CommutativeMonoid, EqualInContext, Monoid, Semigroup, Semiring};

// Semigroup

/// `(a <> b) <> c == a <> (b <> c)` at `ctx`.
pub fn associativity<T>(a: &T, b: &T, c: &T, ctx: &T::Context) -> bool
where
    T: Semigroup + EqualInContext,
{
    a.combine(b)
        .combine(c)
        .equals_in_context(&a.combine(&b.combine(c)), ctx)
}

// Monoid

/// `identity <> a == a` at `ctx`.
pub fn left_identity<T>(a: &T, ctx: &T::Context) -> bool
where
    T: Monoid + EqualInContext,
{
    T::identity().combine(a).equals_in_context(a, ctx)
}

/// `a <> identity == a` at `ctx`.
pub fn right_identity<T>(a: &T, ctx: &T::Context) -> bool
where
    T: Monoid + EqualInContext,
{
    a.combine(&T::identity()).equals_in_context(a, ctx)
}

/// Both identity laws at `ctx`.
pub fn identity<T>(a: &T, ctx: &T::Context) -> bool
where
    T: Monoid + EqualInContext,
{
    let left = left_identity(a, ctx);
    let right = right_identity(a, ctx);
    left & right
}

// CommutativeMonoid

/// `a <> b == b <> a` at `ctx`.
pub fn commutativity<T>(a: &T, b: &T, ctx: &T::Context) -> bool
where
    T: CommutativeMonoid + EqualInContext,
{
    a.combine(b).equals_in_context(&b.combine(a), ctx)
}

// BoundedSemilattice

/// `a <> a == a` at `ctx`.
pub fn idempotence<T>(a: &T, ctx: &T::Context) -> bool
where
    T: BoundedSemilattice + EqualInContext,
{
    a.combine(a).equals_in_context(a, ctx)
}

// Semiring

/// `(a <>+ b) <>+ c == a <>+ (b <>+ c)` at `ctx`.
pub fn additive_associativity<S>(a: &S, b: &S, c: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    a.add_combine(b)
        .add_combine(c)
        .equals_in_context(&a.add_combine(&b.add_combine(c)), ctx)
}

/// `zero <>+ a == a == a <>+ zero` at `ctx`.
pub fn additive_identity<S>(a: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    let left = S::zero().add_combine(a).equals_in_context(a, ctx);
    let right = a.add_combine(&S::zero()).equals_in_context(a, ctx);
    left & right
}

/// `a <>+ b == b <>+ a` at `ctx`.
pub fn additive_commutativity<S>(a: &S, b: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    a.add_combine(b).equals_in_context(&b.add_combine(a), ctx)
}

/// `(a <>* b) <>* c == a <>* (b <>* c)` at `ctx`.
pub fn multiplicative_associativity<S>(a: &S, b: &S, c: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    a.multiply_combine(b)
        .multiply_combine(c)
        .equals_in_context(&a.multiply_combine(&b.multiply_combine(c)), ctx)
}

/// `one <>* a == a == a <>* one` at `ctx`.
pub fn multiplicative_identity<S>(a: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    let left = S::one().multiply_combine(a).equals_in_context(a, ctx);
    let right = a.multiply_combine(&S::one()).equals_in_context(a, ctx);
    left & right
}

/// `a <>* (b <>+ c) == (a <>* b) <>+ (a <>* c)` at `ctx`.
pub fn left_distributivity<S>(a: &S, b: &S, c: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    a.multiply_combine(&b.add_combine(c)).equals_in_context(
        &a.multiply_combine(b).add_combine(&a.multiply_combine(c)),
        ctx,
    )
}

/// `(b <>+ c) <>* a == (b <>* a) <>+ (c <>* a)` at `ctx`.
pub fn right_distributivity<S>(a: &S, b: &S, c: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    b.add_combine(c).multiply_combine(a).equals_in_context(
        &b.multiply_combine(a).add_combine(&c.multiply_combine(a)),
        ctx,
    )
}

/// Multiplication distributes over addition on both sides, at `ctx`.
pub fn distributivity<S>(a: &S, b: &S, c: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    let left = left_distributivity(a, b, c, ctx);
    let right = right_distributivity(a, b, c, ctx);
    left & right
}

/// `zero <>* a == zero` and `a <>* zero == zero` at `ctx`.
pub fn zero_annihilation<S>(a: &S, ctx: &S::Context) -> bool
where
    S: Semiring + EqualInContext,
{
    let left = S::zero().multiply_combine(a).equals_in_context(&S::zero(), ctx);
    let right = a.multiply_combine(&S::zero()).equals_in_context(&S::zero(), ctx);
    left & right
}

// Homomorphism

/// `f` preserves the monoid structure at `a`, `b`, observed at `ctx`.
pub fn homomorphism<A, B, F>(f: F, a: &A, b: &A, ctx: &B::Context) -> bool
where
    A: Monoid,
    B: Monoid + EqualInContext,
    F: Fn(&A) -> B,
{
    let combine = f(&a.combine(b)).equals_in_context(&f(a).combine(&f(b)), ctx);
    let identity = f(&A::identity()).equals_in_context(&B::identity(), ctx);
    combine & identity
}
