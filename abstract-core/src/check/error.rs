//! Failures reported by the law checker.

use thiserror::Error;

use crate::LawKind;

/// Why a law check did not pass.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The law evaluated to `false`. `witness` is the minimal failing
    /// input (and sampled contexts, if any) after shrinking.
    #[error("{type_name} violates {law}: {reason}; minimal failing input: {witness}")]
    Violation {
        /// The violated law.
        law: LawKind,
        /// The structure under test.
        type_name: &'static str,
        /// `Debug` rendering of the failing inputs.
        witness: String,
        /// The failure message.
        reason: String,
    },

    /// Generation gave up before enough cases were produced.
    #[error("checking {law} for {type_name} aborted: {reason}")]
    Aborted {
        /// The law being checked.
        law: LawKind,
        /// The structure under test.
        type_name: &'static str,
        /// Why the runner stopped.
        reason: String,
    },
}

impl CheckError {
    /// The law the error is about.
    pub fn law(&self) -> LawKind {
        match self {
            CheckError::Violation { law, .. } | CheckError::Aborted { law, .. } => *law,
        }
    }

    /// The failing input, when the law was actually violated.
    pub fn witness(&self) -> Option<&str> {
        match self {
            CheckError::Violation { witness, .. } => Some(witness),
            CheckError::Aborted { .. } => None,
        }
    }
}
