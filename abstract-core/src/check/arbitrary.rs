//! Strategies for structures `proptest` cannot generate on its own.
//!
//! The interesting part is **co-generation** of functions. A generated
//! function is a random 64-bit seed; applying it to an input hashes the
//! seed together with the input, seeds a fresh generator from that
//! hash, and draws one value from the codomain strategy. The result is
//! a total, deterministic function whose outputs look independent
//! across inputs. Shrinking a failing function shrinks its seed, and
//! the seed is part of the function's `Debug` output so a failure can
//! be rebuilt with [`function_from_seed`] / [`endofunction_from_seed`].
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use proptest::collection::{vec, SizeRange};
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

use crate::{Endofunction, Function, NonEmptyVec, Wrapper};

/// Lift a strategy for the wrapped type into one for the wrapper.
pub fn wrapped<W, S>(inner: S) -> impl Strategy<Value = W>
where
    W: Wrapper + Debug,
    S: Strategy<Value = W::Wrapped>,
{
    inner.prop_map(W::wrap)
}

/// Arbitrary non-empty sequences: one head from `element`, then a tail
/// whose length is drawn from `tail_len`.
pub fn non_empty_vec<S>(
    element: S,
    tail_len: impl Into<SizeRange>,
) -> impl Strategy<Value = NonEmptyVec<S::Value>>
where
    S: Strategy,
{
    let element = Arc::new(element);
    (Arc::clone(&element), vec(element, tail_len))
        .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
}

/// Arbitrary total functions `A -> B`, with outputs drawn from
/// `codomain`.
pub fn function<A, S>(codomain: S) -> impl Strategy<Value = Function<A, S::Value>>
where
    A: Hash + 'static,
    S: Strategy + Send + Sync + 'static,
{
    let codomain = Arc::new(codomain);
    any::<u64>().prop_map(move |seed| function_from_seed(Arc::clone(&codomain), seed))
}

/// Arbitrary total functions `A -> A`, with outputs drawn from
/// `codomain`.
pub fn endofunction<S>(codomain: S) -> impl Strategy<Value = Endofunction<S::Value>>
where
    S: Strategy + Send + Sync + 'static,
    S::Value: Hash + 'static,
{
    let codomain = Arc::new(codomain);
    any::<u64>().prop_map(move |seed| endofunction_from_seed(Arc::clone(&codomain), seed))
}

/// The function [`function`] produces for `seed`.
pub fn function_from_seed<A, S>(codomain: Arc<S>, seed: u64) -> Function<A, S::Value>
where
    A: Hash + 'static,
    S: Strategy + Send + Sync + 'static,
{
    Function::named(label(seed), move |a: &A| cogenerate(&*codomain, seed, a))
}

/// The endofunction [`endofunction`] produces for `seed`.
pub fn endofunction_from_seed<S>(codomain: Arc<S>, seed: u64) -> Endofunction<S::Value>
where
    S: Strategy + Send + Sync + 'static,
    S::Value: Hash + 'static,
{
    Endofunction::named(label(seed), move |a: S::Value| {
        cogenerate(&*codomain, seed, &a)
    })
}

fn label(seed: u64) -> String {
    format!("seed={seed:#018x}")
}

/// Draw the output for `input` from `codomain`, deterministically in
/// `(seed, input)`.
fn cogenerate<A, S>(codomain: &S, seed: u64, input: &A) -> S::Value
where
    A: Hash + ?Sized,
    S: Strategy + ?Sized,
{
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    input.hash(&mut hasher);
    let h = hasher.finish();

    let mut key = [0u8; 32];
    let words = [h, seed, h.rotate_left(21), seed.rotate_left(43) ^ h];
    for (chunk, word) in key.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &key);
    let mut runner = TestRunner::new_with_rng(Config::default(), rng);
    match codomain.new_tree(&mut runner) {
        Ok(tree) => tree.current(),
        // A function must be total: there is no value to fall back on.
        Err(reason) => panic!("codomain strategy produced no value: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EqualInContext, Max};

    fn sample<S: Strategy>(strategy: &S) -> S::Value {
        let mut runner = TestRunner::deterministic();
        strategy
            .new_tree(&mut runner)
            .expect("strategy yields a value")
            .current()
    }

    #[test]
    fn generated_functions_are_deterministic() {
        let f = sample(&function::<String, _>(any::<i32>()));
        let x = "hello".to_string();
        assert_eq!(f.call(&x), f.call(&x));
        assert!(f.equals_in_context(&f.clone(), &x));
    }

    #[test]
    fn same_seed_rebuilds_same_function() {
        let codomain = Arc::new(0u32..1000);
        let f = function_from_seed::<i32, _>(Arc::clone(&codomain), 7);
        let g = function_from_seed::<i32, _>(codomain, 7);
        assert!(f.equals_in_all(&g, &[-3, 0, 5, 99]));
        assert_eq!(f.name(), "seed=0x0000000000000007");
    }

    #[test]
    fn outputs_respect_the_codomain() {
        let f = endofunction_from_seed(Arc::new(10i64..20), 99);
        for x in -50..50 {
            let y = f.call(x);
            assert!((10..20).contains(&y));
        }
    }

    #[test]
    fn outputs_vary_across_inputs() {
        let f = function_from_seed::<u32, _>(Arc::new(any::<u64>()), 1);
        let distinct: std::collections::HashSet<u64> = (0..32).map(|x| f.call(&x)).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn wrapped_lifts_inner_strategy() {
        let m: Max<u8> = sample(&wrapped::<Max<u8>, _>(Just(4u8)));
        assert_eq!(m, Max(4));
    }

    #[test]
    fn non_empty_vec_respects_tail_length() {
        let mut runner = TestRunner::deterministic();
        let strategy = non_empty_vec(0u8..4, 0..3);
        for _ in 0..32 {
            let xs = strategy.new_tree(&mut runner).unwrap().current();
            assert!((1..=3).contains(&xs.len()), "{xs:?}");
            assert!(xs.iter().all(|x| *x < 4));
        }
        assert_eq!(sample(&non_empty_vec(Just('a'), 0..1)).len(), 1);
    }
}
