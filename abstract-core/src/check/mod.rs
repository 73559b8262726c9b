//! Property-based law checking.
//!
//! A [`Checker`] runs every law of a contract against values drawn from
//! a [`proptest`] strategy. Each law is a separate run; the first law
//! that fails is reported as a [`CheckError`] carrying the shrunk
//! counter-example, so a failure names exactly which law broke and for
//! which inputs.
//!
//! Structures with [context equality](crate::EqualInContext) use the
//! `*_in_context` methods, which also take a strategy for contexts. Each
//! case samples [`CheckConfig::contexts_per_case`] contexts and the law
//! must hold at every one of them.
//!
//! ```rust
//! use abstract_core::check::{arbitrary, Checker};
//! use abstract_core::{Add, Max};
//! use proptest::prelude::*;
//!
//! let checker = Checker::default();
//! checker
//!     .commutative_monoid(arbitrary::wrapped::<Add<i32>, _>(any::<i32>()))
//!     .unwrap();
//! checker
//!     .bounded_semilattice(any::<i64>().prop_map(Max))
//!     .unwrap();
//! checker
//!     .monoid_in_context(arbitrary::endofunction(any::<u8>()), any::<u8>())
//!     .unwrap();
//! ```
use std::any::type_name;
use std::fmt::Debug;

use proptest::collection::vec;
use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestError, TestRunner};
use tracing::{debug, debug_span, warn};

use crate::law::{self, LawKind};
use crate::{
    law_in_context, BoundedSemilattice, CommutativeMonoid, EqualInContext, Monoid, Semigroup,
    Semiring,
};

pub mod arbitrary;
mod config;
mod error;

pub use config::CheckConfig;
pub use error::CheckError;

/// Runs the law catalog against generated values.
#[derive(Clone, Debug, Default)]
pub struct Checker {
    config: CheckConfig,
}

/// `law` holds at every sampled context.
fn at_every<C>(contexts: &[C], law: impl Fn(&C) -> bool) -> bool {
    contexts.iter().fold(true, |holds, ctx| holds & law(ctx))
}

impl Checker {
    /// A checker with the given sampling configuration.
    pub fn new(config: CheckConfig) -> Self {
        Checker { config }
    }

    /// The sampling configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    fn verify<S, P>(
        &self,
        law: LawKind,
        type_name: &'static str,
        strategy: S,
        predicate: P,
    ) -> Result<(), CheckError>
    where
        S: Strategy,
        P: Fn(&S::Value) -> bool,
    {
        let span = debug_span!("law", %law, type_name);
        let _enter = span.enter();

        let mut runner = TestRunner::new(self.config.runner_config());
        let outcome = runner.run(&strategy, |value| {
            if predicate(&value) {
                Ok(())
            } else {
                Err(TestCaseError::fail(law.name()))
            }
        });

        match outcome {
            Ok(()) => {
                debug!(cases = self.config.cases, "law holds");
                Ok(())
            }
            Err(TestError::Fail(reason, value)) => {
                let witness = format!("{value:?}");
                warn!(%witness, "law violated");
                Err(CheckError::Violation {
                    law,
                    type_name,
                    witness,
                    reason: reason.to_string(),
                })
            }
            Err(TestError::Abort(reason)) => {
                warn!(%reason, "law check aborted");
                Err(CheckError::Aborted {
                    law,
                    type_name,
                    reason: reason.to_string(),
                })
            }
        }
    }

    // Direct equality

    /// Associativity.
    pub fn semigroup<T, S>(&self, values: S) -> Result<(), CheckError>
    where
        T: Semigroup + PartialEq + Debug,
        S: Strategy<Value = T>,
    {
        self.verify(
            LawKind::Associativity,
            type_name::<T>(),
            (&values, &values, &values),
            |(a, b, c)| law::associativity(a, b, c),
        )
    }

    /// The semigroup laws, then left and right identity.
    pub fn monoid<T, S>(&self, values: S) -> Result<(), CheckError>
    where
        T: Monoid + PartialEq + Debug,
        S: Strategy<Value = T>,
    {
        self.semigroup(&values)?;
        self.verify(LawKind::LeftIdentity, type_name::<T>(), &values, |a| {
            law::left_identity(a)
        })?;
        self.verify(LawKind::RightIdentity, type_name::<T>(), &values, |a| {
            law::right_identity(a)
        })
    }

    /// The monoid laws, then commutativity.
    pub fn commutative_monoid<T, S>(&self, values: S) -> Result<(), CheckError>
    where
        T: CommutativeMonoid + PartialEq + Debug,
        S: Strategy<Value = T>,
    {
        self.monoid(&values)?;
        self.verify(
            LawKind::Commutativity,
            type_name::<T>(),
            (&values, &values),
            |(a, b)| law::commutativity(a, b),
        )
    }

    /// The commutative monoid laws, then idempotence.
    pub fn bounded_semilattice<T, S>(&self, values: S) -> Result<(), CheckError>
    where
        T: BoundedSemilattice + PartialEq + Debug,
        S: Strategy<Value = T>,
    {
        self.commutative_monoid(&values)?;
        self.verify(LawKind::Idempotence, type_name::<T>(), &values, |a| {
            law::idempotence(a)
        })
    }

    /// Addition is a commutative monoid, multiplication a monoid,
    /// multiplication distributes on both sides and zero annihilates.
    /// Each law is a separate run, so a failure names the exact law.
    pub fn semiring<T, S>(&self, values: S) -> Result<(), CheckError>
    where
        T: Semiring + PartialEq + Debug,
        S: Strategy<Value = T>,
    {
        let name = type_name::<T>();
        let triples = (&values, &values, &values);

        self.verify(LawKind::AdditiveAssociativity, name, &triples, |(a, b, c)| {
            law::additive_associativity(a, b, c)
        })?;
        self.verify(LawKind::AdditiveIdentity, name, &values, |a| {
            law::additive_identity(a)
        })?;
        self.verify(LawKind::AdditiveCommutativity, name, &triples, |(a, b, _)| {
            law::additive_commutativity(a, b)
        })?;
        self.verify(
            LawKind::MultiplicativeAssociativity,
            name,
            &triples,
            |(a, b, c)| law::multiplicative_associativity(a, b, c),
        )?;
        self.verify(LawKind::MultiplicativeIdentity, name, &values, |a| {
            law::multiplicative_identity(a)
        })?;
        self.verify(LawKind::LeftDistributivity, name, &triples, |(a, b, c)| {
            law::left_distributivity(a, b, c)
        })?;
        self.verify(LawKind::RightDistributivity, name, &triples, |(a, b, c)| {
            law::right_distributivity(a, b, c)
        })?;
        self.verify(LawKind::ZeroAnnihilation, name, &values, |a| {
            law::zero_annihilation(a)
        })
    }

    /// `f` is a monoid homomorphism from `A` to `B`.
    pub fn homomorphism<A, B, F, S>(&self, f: F, values: S) -> Result<(), CheckError>
    where
        A: Monoid + Debug,
        B: Monoid + PartialEq,
        F: Fn(&A) -> B,
        S: Strategy<Value = A>,
    {
        self.verify(
            LawKind::Homomorphism,
            type_name::<F>(),
            (&values, &values),
            |(a, b)| law::homomorphism(&f, a, b),
        )
    }

    // Context equality

    /// Associativity at every sampled context.
    pub fn semigroup_in_context<T, S, C>(&self, values: S, contexts: C) -> Result<(), CheckError>
    where
        T: Semigroup + EqualInContext + Debug,
        T::Context: Debug,
        S: Strategy<Value = T>,
        C: Strategy<Value = T::Context>,
    {
        let contexts = vec(contexts, self.config.contexts());
        self.verify(
            LawKind::Associativity,
            type_name::<T>(),
            (&values, &values, &values, contexts),
            |(a, b, c, ctxs)| at_every(ctxs, |ctx| law_in_context::associativity(a, b, c, ctx)),
        )
    }

    /// The monoid laws at every sampled context.
    pub fn monoid_in_context<T, S, C>(&self, values: S, contexts: C) -> Result<(), CheckError>
    where
        T: Monoid + EqualInContext + Debug,
        T::Context: Debug,
        S: Strategy<Value = T>,
        C: Strategy<Value = T::Context>,
    {
        self.semigroup_in_context(&values, &contexts)?;
        let name = type_name::<T>();
        let n = self.config.contexts();
        self.verify(
            LawKind::LeftIdentity,
            name,
            (&values, vec(&contexts, n)),
            |(a, ctxs)| at_every(ctxs, |ctx| law_in_context::left_identity(a, ctx)),
        )?;
        self.verify(
            LawKind::RightIdentity,
            name,
            (&values, vec(&contexts, n)),
            |(a, ctxs)| at_every(ctxs, |ctx| law_in_context::right_identity(a, ctx)),
        )
    }

    /// The commutative monoid laws at every sampled context.
    pub fn commutative_monoid_in_context<T, S, C>(
        &self,
        values: S,
        contexts: C,
    ) -> Result<(), CheckError>
    where
        T: CommutativeMonoid + EqualInContext + Debug,
        T::Context: Debug,
        S: Strategy<Value = T>,
        C: Strategy<Value = T::Context>,
    {
        self.monoid_in_context(&values, &contexts)?;
        self.verify(
            LawKind::Commutativity,
            type_name::<T>(),
            (&values, &values, vec(&contexts, self.config.contexts())),
            |(a, b, ctxs)| at_every(ctxs, |ctx| law_in_context::commutativity(a, b, ctx)),
        )
    }

    /// The bounded semilattice laws at every sampled context.
    pub fn bounded_semilattice_in_context<T, S, C>(
        &self,
        values: S,
        contexts: C,
    ) -> Result<(), CheckError>
    where
        T: BoundedSemilattice + EqualInContext + Debug,
        T::Context: Debug,
        S: Strategy<Value = T>,
        C: Strategy<Value = T::Context>,
    {
        self.commutative_monoid_in_context(&values, &contexts)?;
        self.verify(
            LawKind::Idempotence,
            type_name::<T>(),
            (&values, vec(&contexts, self.config.contexts())),
            |(a, ctxs)| at_every(ctxs, |ctx| law_in_context::idempotence(a, ctx)),
        )
    }

    /// The semiring laws at every sampled context.
    pub fn semiring_in_context<T, S, C>(&self, values: S, contexts: C) -> Result<(), CheckError>
    where
        T: Semiring + EqualInContext + Debug,
        T::Context: Debug,
        S: Strategy<Value = T>,
        C: Strategy<Value = T::Context>,
    {
        let name = type_name::<T>();
        let cases = (
            &values,
            &values,
            &values,
            vec(&contexts, self.config.contexts()),
        );

        self.verify(
            LawKind::AdditiveAssociativity,
            name,
            &cases,
            |(a, b, c, ctxs)| {
                at_every(ctxs, |ctx| law_in_context::additive_associativity(a, b, c, ctx))
            },
        )?;
        self.verify(LawKind::AdditiveIdentity, name, &cases, |(a, _, _, ctxs)| {
            at_every(ctxs, |ctx| law_in_context::additive_identity(a, ctx))
        })?;
        self.verify(
            LawKind::AdditiveCommutativity,
            name,
            &cases,
            |(a, b, _, ctxs)| {
                at_every(ctxs, |ctx| law_in_context::additive_commutativity(a, b, ctx))
            },
        )?;
        self.verify(
            LawKind::MultiplicativeAssociativity,
            name,
            &cases,
            |(a, b, c, ctxs)| {
                at_every(ctxs, |ctx| {
                    law_in_context::multiplicative_associativity(a, b, c, ctx)
                })
            },
        )?;
        self.verify(
            LawKind::MultiplicativeIdentity,
            name,
            &cases,
            |(a, _, _, ctxs)| {
                at_every(ctxs, |ctx| law_in_context::multiplicative_identity(a, ctx))
            },
        )?;
        self.verify(
            LawKind::LeftDistributivity,
            name,
            &cases,
            |(a, b, c, ctxs)| {
                at_every(ctxs, |ctx| law_in_context::left_distributivity(a, b, c, ctx))
            },
        )?;
        self.verify(
            LawKind::RightDistributivity,
            name,
            &cases,
            |(a, b, c, ctxs)| {
                at_every(ctxs, |ctx| law_in_context::right_distributivity(a, b, c, ctx))
            },
        )?;
        self.verify(LawKind::ZeroAnnihilation, name, &cases, |(a, _, _, ctxs)| {
            at_every(ctxs, |ctx| law_in_context::zero_annihilation(a, ctx))
        })
    }

    /// `f` is a monoid homomorphism into a structure with context
    /// equality.
    pub fn homomorphism_in_context<A, B, F, S, C>(
        &self,
        f: F,
        values: S,
        contexts: C,
    ) -> Result<(), CheckError>
    where
        A: Monoid + Debug,
        B: Monoid + EqualInContext,
        B::Context: Debug,
        F: Fn(&A) -> B,
        S: Strategy<Value = A>,
        C: Strategy<Value = B::Context>,
    {
        self.verify(
            LawKind::Homomorphism,
            type_name::<F>(),
            (&values, &values, vec(contexts, self.config.contexts())),
            |(a, b, ctxs)| at_every(ctxs, |ctx| law_in_context::homomorphism(&f, a, b, ctx)),
        )
    }
}
