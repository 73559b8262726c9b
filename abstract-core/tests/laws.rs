//! End-to-end law checks over the standard conformances and over
//! structures whose operations come from the derivation rules.

use std::cmp::Ordering;

use abstract_core::check::{arbitrary, CheckConfig, CheckError, Checker};
use abstract_core::{
    derive_from_double_wrapper, derive_from_self_wrapper, derive_semigroup_from_double_wrapper,
    derive_semigroup_from_self_wrapper, law, law_in_context, Add, BoundedSemilattice,
    CommutativeMonoid, Endofunction, EqualInContext, First, Function, LawKind, Last, Magma, Max,
    Monoid, Multiset, NonEmptyVec, Semigroup, Semiring, Wrapper,
};
use num_traits::Bounded;
use proptest::prelude::*;

fn checker() -> Checker {
    Checker::new(CheckConfig::default().with_cases(128))
}

// Scenarios

#[test]
fn integers_under_addition() {
    assert_eq!(Add(3).combine(&Add(5)), Add(8));
    assert_eq!(Add::<i32>::identity(), Add(0));
    assert!(law::associativity(&Add(2), &Add(3), &Add(4)));
    checker()
        .commutative_monoid(arbitrary::wrapped::<Add<i32>, _>(any::<i32>()))
        .unwrap();
}

#[test]
fn integers_under_maximum() {
    assert_eq!(Max(3).combine(&Max(7)), Max(7));
    assert_eq!(Max::<i32>::identity(), Max(i32::MIN));
    assert_eq!(Max(7).combine(&Max(7)), Max(7));
    checker()
        .bounded_semilattice(any::<i32>().prop_map(Max))
        .unwrap();
}

#[test]
fn booleans_as_a_semiring() {
    assert!(!bool::zero());
    assert!(bool::one());
    let (a, b, c) = (true, false, true);
    assert!(a.multiply_combine(&b.add_combine(&c)));
    assert!(a.multiply_combine(&b).add_combine(&a.multiply_combine(&c)));
    assert!(law::distributivity(&a, &b, &c));
    checker().semiring(any::<bool>()).unwrap();
}

#[test]
fn sequential_composition_is_checked_per_context() {
    let f = Endofunction::new(|x: i64| x + 1);
    let g = Endofunction::new(|x: i64| x * 2);
    let fg = f.combine(&g);
    assert_eq!(fg.call(3), 8);
    assert!(fg.equals_in_context(&Endofunction::new(|x: i64| (x + 1) * 2), &3));
    // g then f agrees with f then g nowhere, so one context decides it.
    assert!(!fg.equals_in_context(&g.combine(&f), &3));

    let checker = Checker::new(
        CheckConfig::default()
            .with_cases(64)
            .with_contexts_per_case(4),
    );
    checker
        .monoid_in_context(arbitrary::endofunction(any::<i64>()), any::<i64>())
        .unwrap();
}

#[test]
fn ordering_is_left_biased() {
    let lt = "ant".cmp("bee");
    let eq = "cat".cmp("cat");
    let gt = "dog".cmp("cow");
    assert_eq!(lt.combine(&gt), Ordering::Less);
    assert_eq!(eq.combine(&gt), Ordering::Greater);

    let orderings = prop_oneof![
        Just(Ordering::Less),
        Just(Ordering::Equal),
        Just(Ordering::Greater)
    ];
    checker().monoid(orderings).unwrap();
}

#[test]
fn non_empty_sequences_concatenate_without_identity() {
    let a = NonEmptyVec::new("x", vec!["y"]);
    let b = NonEmptyVec::singleton("z");
    assert_eq!(a.combine(&b).into_vec(), vec!["x", "y", "z"]);
    assert!(NonEmptyVec::<&str>::from_vec(Vec::new()).is_none());
    checker()
        .semigroup(arbitrary::non_empty_vec(any::<u8>(), 0..5))
        .unwrap();
}

// Derivation soundness

/// Watermark levels: combine keeps the highest, via the double wrapper
/// rule over `Max<i32>`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Level(i32);

impl Wrapper for Level {
    type Wrapped = i32;

    fn wrap(value: i32) -> Self {
        Level(value)
    }

    fn get(&self) -> &i32 {
        &self.0
    }

    fn into_inner(self) -> i32 {
        self.0
    }
}

impl Magma for Level {
    fn combine(&self, other: &Self) -> Self {
        derive_from_double_wrapper::<Self, Max<i32>>().combine(self, other)
    }
}

impl Semigroup for Level {}

impl Monoid for Level {
    fn identity() -> Self {
        derive_from_double_wrapper::<Self, Max<i32>>().identity()
    }
}

impl CommutativeMonoid for Level {}

impl BoundedSemilattice for Level {}

/// An ordinal combined by the self wrapper rule: `Max<Priority>`
/// wraps `Priority` itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    Low,
    Normal,
    High,
}

impl Bounded for Priority {
    fn min_value() -> Self {
        Priority::Low
    }

    fn max_value() -> Self {
        Priority::High
    }
}

impl Magma for Priority {
    fn combine(&self, other: &Self) -> Self {
        derive_from_self_wrapper::<Self, Max<Self>>().combine(self, other)
    }
}

impl Semigroup for Priority {}

impl Monoid for Priority {
    fn identity() -> Self {
        derive_from_self_wrapper::<Self, Max<Self>>().identity()
    }
}

impl CommutativeMonoid for Priority {}

impl BoundedSemilattice for Priority {}

#[test]
fn double_wrapper_derivation_obeys_the_laws() {
    assert_eq!(Level::identity(), Level(i32::MIN));
    assert_eq!(Level(4).combine(&Level(-2)), Level(4));
    checker()
        .bounded_semilattice(arbitrary::wrapped::<Level, _>(any::<i32>()))
        .unwrap();
}

#[test]
fn self_wrapper_derivation_obeys_the_laws() {
    assert_eq!(Priority::identity(), Priority::Low);
    assert_eq!(
        Priority::concat([Priority::Normal, Priority::High, Priority::Low]),
        Priority::High
    );
    let priorities = prop_oneof![
        Just(Priority::Low),
        Just(Priority::Normal),
        Just(Priority::High)
    ];
    checker().bounded_semilattice(priorities).unwrap();
}

/// The most recent reading wins; there is no empty reading.
#[derive(Clone, Debug, PartialEq)]
struct Reading(String);

impl Magma for Reading {
    fn combine(&self, other: &Self) -> Self {
        derive_semigroup_from_self_wrapper::<Self, Last<Self>>().combine(self, other)
    }
}

impl Semigroup for Reading {}

/// The first level seen wins, through `First<i32>` over `Level`'s value.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Opening(Level);

impl Magma for Opening {
    fn combine(&self, other: &Self) -> Self {
        Opening(derive_semigroup_from_double_wrapper::<Level, First<i32>>().combine(&self.0, &other.0))
    }
}

impl Semigroup for Opening {}

#[test]
fn semigroup_roles_derive_combine() {
    let a = Reading("a".to_string());
    let b = Reading("b".to_string());
    assert_eq!(a.combine(&b), b);
    assert_eq!(
        Reading::combine_all([a.clone(), b.clone(), a.clone()]),
        Some(a)
    );
    checker()
        .semigroup("[a-z]{0,4}".prop_map(Reading))
        .unwrap();

    assert_eq!(Opening(Level(2)).combine(&Opening(Level(9))), Opening(Level(2)));
    checker()
        .semigroup(any::<i32>().prop_map(|n| Opening(Level(n))))
        .unwrap();
}

#[test]
fn integer_semirings_derive_both_roles() {
    checker().semiring(any::<u32>()).unwrap();
    checker().semiring(any::<i64>()).unwrap();
}

#[test]
fn functions_into_a_semilattice() {
    let checker = Checker::new(
        CheckConfig::default()
            .with_cases(64)
            .with_contexts_per_case(2),
    );
    checker
        .bounded_semilattice_in_context(
            arbitrary::function::<String, _>(any::<i32>().prop_map(Max)),
            "[a-z]{0,6}",
        )
        .unwrap();
}

// Violations

/// Addition with the wrong identity.
#[derive(Clone, Copy, Debug, PartialEq)]
struct OffByOne(i32);

impl Magma for OffByOne {
    fn combine(&self, other: &Self) -> Self {
        OffByOne(self.0.wrapping_add(other.0))
    }
}

impl Semigroup for OffByOne {}

impl Monoid for OffByOne {
    fn identity() -> Self {
        OffByOne(1)
    }
}

#[test]
fn wrong_identity_is_reported() {
    let err = checker()
        .monoid(any::<i32>().prop_map(OffByOne))
        .unwrap_err();
    match &err {
        CheckError::Violation { law, witness, .. } => {
            assert_eq!(*law, LawKind::LeftIdentity);
            assert!(witness.starts_with("OffByOne("), "{witness}");
        }
        other => panic!("expected a violation, got {other}"),
    }
}

#[test]
fn constant_endofunction_identity_is_reported_in_context() {
    /// Composition with a constant "identity".
    #[derive(Clone, Debug)]
    struct Clamp(Endofunction<u8>);

    impl Magma for Clamp {
        fn combine(&self, other: &Self) -> Self {
            Clamp(self.0.combine(&other.0))
        }
    }

    impl Semigroup for Clamp {}

    impl Monoid for Clamp {
        fn identity() -> Self {
            Clamp(Endofunction::new(|_| 0))
        }
    }

    impl EqualInContext for Clamp {
        type Context = u8;

        fn equals_in_context(&self, other: &Self, ctx: &u8) -> bool {
            self.0.equals_in_context(&other.0, ctx)
        }
    }

    let err = checker()
        .monoid_in_context(
            arbitrary::endofunction(any::<u8>()).prop_map(Clamp),
            any::<u8>(),
        )
        .unwrap_err();
    assert_eq!(err.law(), LawKind::LeftIdentity);
}

// Plain proptest over the predicates

proptest! {
    #[test]
    fn option_lifts_a_semigroup(
        a in any::<Option<Vec<u8>>>(),
        b in any::<Option<Vec<u8>>>(),
        c in any::<Option<Vec<u8>>>(),
    ) {
        prop_assert!(law::associativity(&a, &b, &c));
        prop_assert!(law::identity(&a));
    }

    #[test]
    fn multisets_count_additively(
        xs in proptest::collection::vec(0u8..8, 0..16),
        ys in proptest::collection::vec(0u8..8, 0..16),
    ) {
        let a: Multiset<u8> = xs.iter().copied().collect();
        let b: Multiset<u8> = ys.iter().copied().collect();
        prop_assert!(law::commutativity(&a, &b));
        prop_assert_eq!(a.combine(&b).len(), xs.len() + ys.len());
    }

    #[test]
    fn non_empty_concatenation_is_associative(
        a in arbitrary::non_empty_vec(any::<i16>(), 0..4),
        b in arbitrary::non_empty_vec(any::<i16>(), 0..4),
        c in arbitrary::non_empty_vec(any::<i16>(), 0..4),
    ) {
        prop_assert!(law::associativity(&a, &b, &c));
        prop_assert_eq!(a.combine(&b).len(), a.len() + b.len());
    }

    #[test]
    fn concat_is_a_homomorphism_into_length(
        a in any::<Vec<u16>>(),
        b in any::<Vec<u16>>(),
    ) {
        prop_assert!(law::homomorphism(|v: &Vec<u16>| Add(v.len()), &a, &b));
    }

    #[test]
    fn function_laws_at_a_context(
        f in arbitrary::function::<i32, _>(any::<i8>().prop_map(Max)),
        g in arbitrary::function::<i32, _>(any::<i8>().prop_map(Max)),
        x in any::<i32>(),
    ) {
        prop_assert!(law_in_context::commutativity(&f, &g, &x));
        prop_assert!(law_in_context::idempotence(&f, &x));
        let h: Function<i32, Max<i8>> = f.combine(&g);
        prop_assert_eq!(h.call(&x), Max(f.call(&x).0.max(g.call(&x).0)));
    }
}
