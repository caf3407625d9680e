//! Team model and visible metrics

use olympus_common::{MAX_PROBLEMS, ProblemFilter, ProblemId, StatusFilter};
use serde::{Deserialize, Serialize};

use crate::models::problem::{ProblemCell, ProblemTracker, Solution};
use crate::models::submission::Submission;

/// Stable team handle: index into the engine's team arena
pub type TeamId = usize;

/// Metrics the public ranking is computed from.
///
/// Built only from revealed problem state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleMetrics {
    pub solved: u32,
    pub penalty: u64,
    /// Accept times of solved problems, latest first
    pub accept_times_desc: Vec<u32>,
}

impl VisibleMetrics {
    /// Fold one newly revealed solution into the metrics
    pub fn add(&mut self, solution: Solution) {
        self.solved += 1;
        self.penalty += solution.penalty();
        let at = self
            .accept_times_desc
            .partition_point(|&t| t > solution.accepted_at);
        self.accept_times_desc.insert(at, solution.accepted_at);
    }

    /// Rebuild from scratch out of revealed solutions
    pub fn from_solutions(solutions: impl IntoIterator<Item = Solution>) -> Self {
        let mut metrics = Self::default();
        for solution in solutions {
            metrics.solved += 1;
            metrics.penalty += solution.penalty();
            metrics.accept_times_desc.push(solution.accepted_at);
        }
        metrics.accept_times_desc.sort_unstable_by(|a, b| b.cmp(a));
        metrics
    }
}

/// A registered team
#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    name: String,
    /// Number of live problem columns
    capacity: usize,
    problems: Vec<ProblemTracker>,
    log: Vec<Submission>,
    metrics: VisibleMetrics,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id,
            name: name.into(),
            capacity: capacity.min(MAX_PROBLEMS),
            problems: vec![ProblemTracker::new(); MAX_PROBLEMS],
            log: Vec::new(),
            metrics: VisibleMetrics::default(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.min(MAX_PROBLEMS);
    }

    pub fn metrics(&self) -> &VisibleMetrics {
        &self.metrics
    }

    pub fn log(&self) -> &[Submission] {
        &self.log
    }

    pub fn problem(&self, problem: ProblemId) -> &ProblemTracker {
        &self.problems[problem.index()]
    }

    /// Live problem slots, in letter order
    fn live_problems(&self) -> impl Iterator<Item = &ProblemTracker> {
        self.problems.iter().take(self.capacity)
    }

    /// Append to both the team log and the problem history
    pub fn record(&mut self, submission: Submission) {
        self.log.push(submission);
        self.problems[submission.problem.index()].record(submission);
    }

    /// Reveal the submission just recorded for `problem`, updating metrics on a solve
    pub fn accept_latest(&mut self, problem: ProblemId) -> Option<Solution> {
        let solution = self.problems[problem.index()].accept_latest()?;
        self.metrics.add(solution);
        Some(solution)
    }

    /// Recompute visible metrics from revealed problem state
    pub fn recompute_metrics(&mut self) {
        let solutions: Vec<Solution> = self
            .live_problems()
            .filter_map(ProblemTracker::solution)
            .collect();
        self.metrics = VisibleMetrics::from_solutions(solutions);
    }

    pub fn freeze(&mut self) {
        let capacity = self.capacity;
        for tracker in self.problems.iter_mut().take(capacity) {
            tracker.freeze();
        }
    }

    pub fn clear_freeze(&mut self) {
        for tracker in &mut self.problems {
            tracker.clear_freeze();
        }
    }

    /// Lowest-lettered problem with hidden submissions
    pub fn first_pending_problem(&self) -> Option<ProblemId> {
        self.live_problems()
            .position(ProblemTracker::has_pending_reveal)
            .and_then(ProblemId::new)
    }

    pub fn pending_reveals(&self) -> usize {
        self.live_problems()
            .filter(|tracker| tracker.has_pending_reveal())
            .count()
    }

    /// Unveil one frozen problem, updating metrics on a solve
    pub fn reveal(&mut self, problem: ProblemId) -> Option<Solution> {
        let solution = self.problems[problem.index()].reveal()?;
        self.metrics.add(solution);
        Some(solution)
    }

    /// Most recent submission matching the filters, hidden ones included
    pub fn latest_submission(
        &self,
        problem: ProblemFilter,
        status: StatusFilter,
    ) -> Option<&Submission> {
        self.log.iter().rev().find(|s| s.matches(problem, status))
    }

    /// Scoreboard cells for the live problems
    pub fn cells(&self, board_frozen: bool) -> Vec<ProblemCell> {
        self.live_problems()
            .map(|tracker| tracker.cell(board_frozen))
            .collect()
    }
}
