//! Sampling configuration for [`Checker`](super::Checker).

use proptest::test_runner::Config;

/// How much evidence a law check gathers before it passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Generated cases per law.
    pub cases: u32,
    /// Contexts sampled per case for context-threaded laws. A law must
    /// hold at every one of them.
    pub contexts_per_case: u32,
    /// Upper bound on shrinking steps after a failure.
    pub max_shrink_iters: u32,
}

impl Default for CheckConfig {
    /// Case count and shrink budget follow proptest's defaults (and so
    /// honour `PROPTEST_CASES` / `PROPTEST_MAX_SHRINK_ITERS`); one
    /// context per case.
    fn default() -> Self {
        let base = Config::default();
        CheckConfig {
            cases: base.cases,
            contexts_per_case: 1,
            max_shrink_iters: base.max_shrink_iters,
        }
    }
}

impl CheckConfig {
    /// Set the number of generated cases per law.
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Set the number of contexts sampled per case. Values below 1 are
    /// raised to 1.
    pub fn with_contexts_per_case(mut self, contexts: u32) -> Self {
        self.contexts_per_case = contexts.max(1);
        self
    }

    /// Set the shrinking budget.
    pub fn with_max_shrink_iters(mut self, iters: u32) -> Self {
        self.max_shrink_iters = iters;
        self
    }

    pub(crate) fn runner_config(&self) -> Config {
        Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..Config::default()
        }
    }

    pub(crate) fn contexts(&self) -> usize {
        self.contexts_per_case.max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_samples_one_context() {
        assert_eq!(CheckConfig::default().contexts_per_case, 1);
    }

    #[test]
    fn contexts_are_clamped_to_one() {
        let config = CheckConfig::default().with_contexts_per_case(0);
        assert_eq!(config.contexts_per_case, 1);
        assert_eq!(config.contexts(), 1);
    }

    #[test]
    fn runner_config_carries_settings() {
        let config = CheckConfig::default()
            .with_cases(17)
            .with_max_shrink_iters(5)
            .runner_config();
        assert_eq!(config.cases, 17);
        assert_eq!(config.max_shrink_iters, 5);
        assert!(config.failure_persistence.is_none());
    }
}
