//! Equality for values that can only be observed by application.
//!
//! Two functions are equal iff they agree on every input. That is not
//! decidable in general, so function-shaped structures implement
//! [`EqualInContext`] instead of [`PartialEq`]: given one concrete
//! **context** (a sample input), it decides whether the two values
//! agree *there*. Gaining confidence in equality means sampling enough
//! contexts, which is the job of the [`check`](crate::check) harness,
//! not of this trait.
//!
//! Contexts are pure inputs. They are borrowed for the duration of one
//! comparison and never retained.

/// Equality decided relative to an externally supplied context.
///
/// # Example
///
/// ```rust
/// use abstract_core::{Endofunction, EqualInContext};
///
/// let double = Endofunction::new(|x: i32| x * 2);
/// let square = Endofunction::new(|x: i32| x * x);
///
/// assert!(double.equals_in_context(&square, &2));
/// assert!(!double.equals_in_context(&square, &3));
/// ```
pub trait EqualInContext {
    /// The sample input needed to observe one point of behaviour.
    type Context;

    /// Do `self` and `other` agree when observed through `context`?
    fn equals_in_context(&self, other: &Self, context: &Self::Context) -> bool;

    /// Do `self` and `other` agree on every context in `contexts`?
    ///
    /// Every context is evaluated; the result is the conjunction.
    fn equals_in_all<'a, I>(&self, other: &Self, contexts: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Context>,
        Self::Context: 'a,
    {
        contexts
            .into_iter()
            .fold(true, |acc, ctx| acc & self.equals_in_context(other, ctx))
    }
}

impl<A, B> EqualInContext for (A, B)
where
    A: EqualInContext,
    B: EqualInContext<Context = A::Context>,
{
    type Context = A::Context;

    fn equals_in_context(&self, other: &Self, context: &Self::Context) -> bool {
        let first = self.0.equals_in_context(&other.0, context);
        let second = self.1.equals_in_context(&other.1, context);
        first & second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Polynomials over `i64`, observed by evaluation.
    struct Poly(Vec<i64>);

    impl Poly {
        fn eval(&self, x: i64) -> i64 {
            self.0.iter().rev().fold(0, |acc, c| acc * x + c)
        }
    }

    impl EqualInContext for Poly {
        type Context = i64;

        fn equals_in_context(&self, other: &Self, x: &i64) -> bool {
            self.eval(*x) == other.eval(*x)
        }
    }

    #[test]
    fn agreement_is_per_context() {
        // x^2 and x agree at 0 and 1 only.
        let square = Poly(vec![0, 0, 1]);
        let ident = Poly(vec![0, 1]);
        assert!(square.equals_in_context(&ident, &0));
        assert!(square.equals_in_context(&ident, &1));
        assert!(!square.equals_in_context(&ident, &2));
    }

    #[test]
    fn equals_in_all_requires_every_context() {
        let square = Poly(vec![0, 0, 1]);
        let ident = Poly(vec![0, 1]);
        assert!(square.equals_in_all(&ident, &[0, 1]));
        assert!(!square.equals_in_all(&ident, &[0, 1, 2]));
        assert!(square.equals_in_all(&ident, &[]));
    }

    #[test]
    fn pairs_compare_componentwise() {
        let a = (Poly(vec![1]), Poly(vec![0, 1]));
        let b = (Poly(vec![1]), Poly(vec![0, 0, 1]));
        assert!(a.equals_in_context(&b, &1));
        assert!(!a.equals_in_context(&b, &3));
    }
}
