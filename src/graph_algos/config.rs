/// Default number of steps before a search gives up
pub const DEFAULT_MAX_STEPS: usize = 300;


/// Search settings for `AStar`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStarConfig {
    /// A search fails once it has taken more than `max_steps` steps,
    /// so `Some(n)` allows `n + 1` pops of the open list
    /// `None` searches until the open list is exhausted
    pub max_steps: Option<usize>,
}

impl AStarConfig {

    /// Budget of `max_steps` steps
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps: Some(max_steps) }
    }

    /// No step budget, only open list exhaustion ends a failing search
    pub fn unbounded() -> Self {
        Self { max_steps: None }
    }

    /// True once `steps` has gone past the budget
    pub(crate) fn budget_exhausted(&self, steps: usize) -> bool {
        self.max_steps.is_some_and(|max| steps > max)
    }
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self::with_max_steps(DEFAULT_MAX_STEPS)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget() {
        let config = AStarConfig::default();
        assert_eq!(config.max_steps, Some(DEFAULT_MAX_STEPS));
        assert!(!config.budget_exhausted(DEFAULT_MAX_STEPS));
        assert!(config.budget_exhausted(DEFAULT_MAX_STEPS + 1));
    }

    #[test]
    fn test_unbounded_never_exhausts() {
        let config = AStarConfig::unbounded();
        assert!(!config.budget_exhausted(usize::MAX));
    }

    #[test]
    fn test_zero_budget_allows_a_single_step() {
        let config = AStarConfig::with_max_steps(0);
        assert!(!config.budget_exhausted(0));
        assert!(config.budget_exhausted(1));
    }
}
