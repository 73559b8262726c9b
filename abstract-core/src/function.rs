//! Function-shaped structures.
//!
//! - [`Endofunction<A>`]: functions `A -> A`, a monoid under
//!   sequential composition (left operand runs first) with the identity
//!   function as identity.
//! - [`Function<A, B>`]: functions `A -> B`, inheriting `B`'s structure
//!   pointwise: `(f <> g)(a) = f(a) <> g(a)`. When `B` is a
//!   [`Semiring`] so is `Function<A, B>`, with both operations pointwise
//!   and constant `zero` and `one`.
//!
//! Neither can implement [`PartialEq`]; both implement
//! [`EqualInContext`] with the function's input as the context.
//!
//! Functions are held behind an [`Arc`] so that composition can
//! capture both operands without borrowing them, and so that values can
//! be evaluated from several threads at once.
//!
//! # Example
//!
//! ```rust
//! use abstract_core::{Endofunction, EqualInContext, Magma};
//!
//! let f = Endofunction::new(|x: i32| x + 1);
//! let g = Endofunction::new(|x: i32| x * 2);
//!
//! // f then g
//! let h = f.combine(&g);
//! assert_eq!(h.call(3), 8);
//!
//! let expected = Endofunction::new(|x: i32| (x + 1) * 2);
//! assert!(h.equals_in_context(&expected, &3));
//! ```
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::{
    BoundedSemilattice, CommutativeMonoid, EqualInContext, Magma, Monoid, Semigroup, Semiring,
    Wrapper,
};

/// A shareable `A -> A` function.
pub type EndoFn<A> = Arc<dyn Fn(A) -> A + Send + Sync>;

/// A shareable `A -> B` function taking its argument by reference.
pub type ArrowFn<A, B> = Arc<dyn Fn(&A) -> B + Send + Sync>;

const ANONYMOUS: &str = "<fn>";

/// A function from `A` to itself.
pub struct Endofunction<A> {
    f: EndoFn<A>,
    name: Cow<'static, str>,
}

impl<A> Endofunction<A> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        Endofunction {
            f: Arc::new(f),
            name: Cow::Borrowed(ANONYMOUS),
        }
    }

    /// Wrap a closure, with a name shown by [`Debug`](fmt::Debug).
    pub fn named<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        Endofunction {
            f: Arc::new(f),
            name: name.into(),
        }
    }

    /// Apply the function.
    pub fn call(&self, a: A) -> A {
        (self.f)(a)
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<A> Clone for Endofunction<A> {
    fn clone(&self) -> Self {
        Endofunction {
            f: Arc::clone(&self.f),
            name: self.name.clone(),
        }
    }
}

impl<A> fmt::Debug for Endofunction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endofunction({})", self.name)
    }
}

impl<A> Wrapper for Endofunction<A> {
    type Wrapped = EndoFn<A>;

    fn wrap(value: Self::Wrapped) -> Self {
        Endofunction {
            f: value,
            name: Cow::Borrowed(ANONYMOUS),
        }
    }

    fn get(&self) -> &Self::Wrapped {
        &self.f
    }

    fn into_inner(self) -> Self::Wrapped {
        self.f
    }
}

impl<A: 'static> Magma for Endofunction<A> {
    /// Sequential composition: `self` runs first, then `other`.
    fn combine(&self, other: &Self) -> Self {
        let first = Arc::clone(&self.f);
        let second = Arc::clone(&other.f);
        Endofunction {
            f: Arc::new(move |a| second(first(a))),
            name: Cow::Owned(format!("{} ; {}", self.name, other.name)),
        }
    }
}

impl<A: 'static> Semigroup for Endofunction<A> {}

impl<A: 'static> Monoid for Endofunction<A> {
    fn identity() -> Self {
        Endofunction::named("id", |a| a)
    }
}

impl<A: PartialEq + Clone> EqualInContext for Endofunction<A> {
    type Context = A;

    fn equals_in_context(&self, other: &Self, context: &A) -> bool {
        self.call(context.clone()) == other.call(context.clone())
    }
}

/// A function from `A` to `B` that inherits the structure of `B`.
pub struct Function<A, B> {
    f: ArrowFn<A, B>,
    name: Cow<'static, str>,
}

impl<A, B> Function<A, B> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        Function {
            f: Arc::new(f),
            name: Cow::Borrowed(ANONYMOUS),
        }
    }

    /// Wrap a closure, with a name shown by [`Debug`](fmt::Debug).
    pub fn named<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&A) -> B + Send + Sync + 'static,
    {
        Function {
            f: Arc::new(f),
            name: name.into(),
        }
    }

    /// Apply the function.
    pub fn call(&self, a: &A) -> B {
        (self.f)(a)
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categorical composition: `self` then `next`.
    pub fn and_then<C>(&self, next: &Function<B, C>) -> Function<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let first = Arc::clone(&self.f);
        let second = Arc::clone(&next.f);
        Function {
            f: Arc::new(move |a: &A| second(&first(a))),
            name: Cow::Owned(format!("{} ; {}", self.name, next.name)),
        }
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Function {
            f: Arc::clone(&self.f),
            name: self.name.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

impl<A, B> Wrapper for Function<A, B> {
    type Wrapped = ArrowFn<A, B>;

    fn wrap(value: Self::Wrapped) -> Self {
        Function {
            f: value,
            name: Cow::Borrowed(ANONYMOUS),
        }
    }

    fn get(&self) -> &Self::Wrapped {
        &self.f
    }

    fn into_inner(self) -> Self::Wrapped {
        self.f
    }
}

impl<A: 'static, B: Magma + 'static> Magma for Function<A, B> {
    /// Pointwise: `(f <> g)(a) = f(a) <> g(a)`.
    fn combine(&self, other: &Self) -> Self {
        let left = Arc::clone(&self.f);
        let right = Arc::clone(&other.f);
        Function {
            f: Arc::new(move |a: &A| left(a).combine(&right(a))),
            name: Cow::Owned(format!("{} <> {}", self.name, other.name)),
        }
    }
}

impl<A: 'static, B: Semigroup + 'static> Semigroup for Function<A, B> {}

impl<A: 'static, B: Monoid + 'static> Monoid for Function<A, B> {
    fn identity() -> Self {
        Function::named("const identity", |_| B::identity())
    }
}

impl<A: 'static, B: CommutativeMonoid + 'static> CommutativeMonoid for Function<A, B> {}

impl<A: 'static, B: BoundedSemilattice + 'static> BoundedSemilattice for Function<A, B> {}

impl<A, B> Semiring for Function<A, B>
where
    A: 'static,
    B: Semiring + 'static,
    B::Additive: 'static,
    B::Multiplicative: 'static,
{
    type Additive = Function<A, B::Additive>;
    type Multiplicative = Function<A, B::Multiplicative>;

    fn add_combine(&self, other: &Self) -> Self {
        let left = Arc::clone(&self.f);
        let right = Arc::clone(&other.f);
        Function {
            f: Arc::new(move |a: &A| left(a).add_combine(&right(a))),
            name: Cow::Owned(format!("{} + {}", self.name, other.name)),
        }
    }

    fn multiply_combine(&self, other: &Self) -> Self {
        let left = Arc::clone(&self.f);
        let right = Arc::clone(&other.f);
        Function {
            f: Arc::new(move |a: &A| left(a).multiply_combine(&right(a))),
            name: Cow::Owned(format!("{} * {}", self.name, other.name)),
        }
    }

    fn zero() -> Self {
        Function::named("const zero", |_| B::zero())
    }

    fn one() -> Self {
        Function::named("const one", |_| B::one())
    }
}

impl<A, B: PartialEq> EqualInContext for Function<A, B> {
    type Context = A;

    fn equals_in_context(&self, other: &Self, context: &A) -> bool {
        self.call(context) == other.call(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{law_in_context, Max};

    #[test]
    fn endofunction_composes_left_to_right() {
        let f = Endofunction::new(|x: i32| x + 1);
        let g = Endofunction::new(|x: i32| x * 2);
        assert_eq!(f.combine(&g).call(3), 8);
        assert_eq!(g.combine(&f).call(3), 7);
    }

    #[test]
    fn endofunction_identity_is_neutral() {
        let f = Endofunction::new(|x: i32| x - 4);
        let id = Endofunction::identity();
        for x in [-3, 0, 11] {
            assert!(id.combine(&f).equals_in_context(&f, &x));
            assert!(f.combine(&id).equals_in_context(&f, &x));
        }
    }

    #[test]
    fn composed_instances_compare_per_context() {
        let f = Endofunction::new(|x: i32| x + 1);
        let g = Endofunction::new(|x: i32| x * 2);
        let fg = f.combine(&g);
        let gf = g.combine(&f);
        // 2x + 2 against 2x + 1: they differ at every point.
        assert!(!fg.equals_in_context(&gf, &3));
        let fg_again =
            Endofunction::new(|x: i32| x + 1).combine(&Endofunction::new(|x: i32| x * 2));
        assert!(fg.equals_in_all(&fg_again, &[-5, 0, 3, 100]));
    }

    #[test]
    fn endofunction_debug_names_composition() {
        let f = Endofunction::named("inc", |x: i32| x + 1);
        let g = Endofunction::named("dbl", |x: i32| x * 2);
        assert_eq!(format!("{:?}", f.combine(&g)), "Endofunction(inc ; dbl)");
    }

    #[test]
    fn function_lifts_codomain_pointwise() {
        let len = Function::new(|s: &String| Max(s.len()));
        let vowels = Function::new(|s: &String| {
            Max(s.chars().filter(|c| "aeiou".contains(*c)).count())
        });
        let both = len.combine(&vowels);
        assert_eq!(both.call(&"queue".to_string()), Max(5));
        assert_eq!(
            Function::<String, Max<usize>>::identity().call(&"x".to_string()),
            Max(0)
        );
    }

    #[test]
    fn predicates_form_a_semiring_pointwise() {
        let even = Function::named("even", |n: &u8| n % 2 == 0);
        let small = Function::named("small", |n: &u8| *n < 10);
        let either = even.add_combine(&small);
        let both = even.multiply_combine(&small);
        assert!(either.call(&3));
        assert!(either.call(&12));
        assert!(!either.call(&13));
        assert!(both.call(&4));
        assert!(!both.call(&12));
        assert_eq!(format!("{both:?}"), "Function(even * small)");

        let zero = Function::<u8, bool>::zero();
        let one = Function::<u8, bool>::one();
        assert!((0..=255).all(|n| !zero.call(&n) && one.call(&n)));
    }

    #[test]
    fn pointwise_semiring_laws_hold_at_every_input() {
        let a = Function::new(|n: &u8| n % 3 == 0);
        let b = Function::new(|n: &u8| n.count_ones() > 3);
        let c = Function::new(|n: &u8| *n > 200);
        for n in [0u8, 3, 15, 201, 255] {
            assert!(law_in_context::additive_associativity(&a, &b, &c, &n));
            assert!(law_in_context::additive_identity(&a, &n));
            assert!(law_in_context::additive_commutativity(&a, &b, &n));
            assert!(law_in_context::multiplicative_associativity(&a, &b, &c, &n));
            assert!(law_in_context::multiplicative_identity(&a, &n));
            assert!(law_in_context::distributivity(&a, &b, &c, &n));
            assert!(law_in_context::zero_annihilation(&a, &n));
        }
    }

    #[test]
    fn integer_functions_sum_pointwise() {
        let square = Function::new(|n: &i64| n * n);
        let double = Function::new(|n: &i64| 2 * n);
        let sum = Function::sum([square.clone(), double.clone(), Function::one()]);
        assert_eq!(sum.call(&4), 25);
        assert_eq!(Function::product([square, double]).call(&3), 54);
    }

    #[test]
    fn function_equality_in_context() {
        let f = Function::new(|x: &i32| Max(*x));
        let g = Function::new(|x: &i32| Max(x.abs()));
        assert!(f.equals_in_context(&g, &4));
        assert!(!f.equals_in_context(&g, &-4));
    }

    #[test]
    fn and_then_composes_across_types() {
        let len = Function::new(|s: &String| s.len());
        let even = Function::new(|n: &usize| n % 2 == 0);
        let even_len = len.and_then(&even);
        assert!(even_len.call(&"ab".to_string()));
        assert!(!even_len.call(&"abc".to_string()));
    }

    #[test]
    fn wrapper_round_trips_the_closure() {
        let f = Endofunction::new(|x: u8| x.wrapping_add(1));
        let raw = f.into_inner();
        let g = Endofunction::wrap(raw);
        assert_eq!(g.call(255), 0);
    }
}
