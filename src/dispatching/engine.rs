//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules into an explicit total order: rules are
//! applied in sequence, each consulted only when all earlier rules tie,
//! and a final tie-breaker settles anything left.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep input order (stable).
    #[default]
    InputOrder,
    /// Lowest process ID first.
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine, TieBreaker};
/// use cpu_sched::models::Process;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Spt)
///     .with_tie_breaker(rules::Fifo)
///     .with_final_tie_breaker(TieBreaker::ById);
///
/// let processes = vec![Process::new(1, 0, 8), Process::new(2, 0, 3)];
/// assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// FCFS order: `(arrival, input order)`.
    pub fn fcfs() -> Self {
        Self::new().with_rule(rules::Fifo)
    }

    /// SJF order: `(burst, arrival, id)`.
    pub fn sjf() -> Self {
        Self::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// Priority order: `(priority, arrival, id)`.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Fifo)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts processes by dispatch order.
    ///
    /// Returns indices into `processes`, first-to-run first. The sort is
    /// stable, so `TieBreaker::InputOrder` keeps input order on full ties.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns the best candidate among `candidates` (indices into `processes`).
    ///
    /// On a full tie the candidate yielded first wins.
    pub fn select_best<I>(&self, processes: &[Process], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b]))
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|rule| rule.evaluate(process)).collect()
    }

    /// Compares two processes under this engine's total order.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
