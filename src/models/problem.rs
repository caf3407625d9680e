//! Per-team problem state

use serde::{Deserialize, Serialize};

use crate::constants::ICPC_PENALTY_MINUTES;
use crate::models::submission::{Submission, failures_before_accept, first_accept};

/// Revealed result of a solved problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Time of the accept that solved the problem
    pub accepted_at: u32,
    /// Failed attempts before that accept
    pub wrong_attempts: u32,
}

impl Solution {
    /// ICPC penalty contributed by this problem
    pub fn penalty(&self) -> u64 {
        ICPC_PENALTY_MINUTES * self.wrong_attempts as u64 + self.accepted_at as u64
    }
}

/// State of one problem slot for one team.
///
/// `solution` is the revealed state and is written at most once.
/// The freeze fields are reset on every freeze cycle.
#[derive(Debug, Clone, Default)]
pub struct ProblemTracker {
    solution: Option<Solution>,
    submissions: Vec<Submission>,
    eligible_freeze: bool,
    freeze_start_index: usize,
}

impl ProblemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn solution(&self) -> Option<Solution> {
        self.solution
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn is_eligible_freeze(&self) -> bool {
        self.eligible_freeze
    }

    pub fn freeze_start_index(&self) -> usize {
        self.freeze_start_index
    }

    /// Append a submission to this problem's history
    pub fn record(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    /// Reveal the latest submission immediately (unfrozen board).
    ///
    /// Returns the new solution if this submission solved the problem.
    pub fn accept_latest(&mut self) -> Option<Solution> {
        if self.is_solved() {
            return None;
        }
        let latest = self.submissions.last()?;
        if !latest.status.is_accepted() {
            return None;
        }
        let solution = Solution {
            accepted_at: latest.time,
            wrong_attempts: failures_before_accept(&self.submissions),
        };
        self.solution = Some(solution);
        Some(solution)
    }

    /// Start a freeze cycle: only unsolved problems can hide submissions
    pub fn freeze(&mut self) {
        if self.is_solved() {
            self.eligible_freeze = false;
            return;
        }
        self.eligible_freeze = true;
        self.freeze_start_index = self.submissions.len();
    }

    /// Failed attempts visible before the freeze boundary
    pub fn failures_before_freeze(&self) -> u32 {
        failures_before_accept(&self.submissions[..self.boundary()])
    }

    /// Submissions hidden behind the freeze boundary
    pub fn pending_count(&self) -> usize {
        if self.eligible_freeze {
            self.submissions.len() - self.boundary()
        } else {
            0
        }
    }

    pub fn has_pending_reveal(&self) -> bool {
        self.pending_count() > 0
    }

    /// Unveil the frozen-period submissions and leave the freeze cycle.
    ///
    /// Returns the new solution if a hidden accept solved the problem.
    pub fn reveal(&mut self) -> Option<Solution> {
        let boundary = self.boundary();
        let was_eligible = std::mem::replace(&mut self.eligible_freeze, false);
        if !was_eligible || self.is_solved() {
            return None;
        }

        let before = failures_before_accept(&self.submissions[..boundary]);
        let frozen = &self.submissions[boundary..];
        let accept = first_accept(frozen)?;
        let solution = Solution {
            accepted_at: accept.time,
            wrong_attempts: before + failures_before_accept(frozen),
        };
        self.solution = Some(solution);
        Some(solution)
    }

    /// Drop freeze bookkeeping without revealing anything
    pub fn clear_freeze(&mut self) {
        self.eligible_freeze = false;
    }

    /// Scoreboard cell for this problem
    pub fn cell(&self, board_frozen: bool) -> ProblemCell {
        if let Some(solution) = self.solution {
            return ProblemCell::Solved {
                wrong_attempts: solution.wrong_attempts,
            };
        }
        if board_frozen && self.eligible_freeze {
            let pending = self.pending_count();
            let failed = self.failures_before_freeze();
            if pending > 0 {
                return ProblemCell::Frozen { failed, pending };
            }
            return ProblemCell::Attempted { failed };
        }
        ProblemCell::Attempted {
            failed: failures_before_accept(&self.submissions),
        }
    }

    fn boundary(&self) -> usize {
        self.freeze_start_index.min(self.submissions.len())
    }
}

/// Rendered state of a problem slot on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProblemCell {
    /// `+` or `+k`
    Solved { wrong_attempts: u32 },
    /// `0/y` or `-x/y`
    Frozen { failed: u32, pending: usize },
    /// `.` or `-x`
    Attempted { failed: u32 },
}

impl std::fmt::Display for ProblemCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            ProblemCell::Solved { wrong_attempts: 0 } => write!(f, "+"),
            ProblemCell::Solved { wrong_attempts } => write!(f, "+{}", wrong_attempts),
            ProblemCell::Frozen { failed: 0, pending } => write!(f, "0/{}", pending),
            ProblemCell::Frozen { failed, pending } => write!(f, "-{}/{}", failed, pending),
            ProblemCell::Attempted { failed: 0 } => write!(f, "."),
            ProblemCell::Attempted { failed } => write!(f, "-{}", failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympus_common::{ProblemId, SubmissionStatus};

    fn push(tracker: &mut ProblemTracker, status: SubmissionStatus, time: u32) {
        let seq = tracker.submissions().len() as u64 + 1;
        tracker.record(Submission {
            problem: ProblemId::new(0).unwrap(),
            status,
            time,
            seq,
        });
    }

    #[test]
    fn test_accept_latest_counts_prior_failures() {
        let mut tracker = ProblemTracker::new();
        push(&mut tracker, SubmissionStatus::WrongAnswer, 3);
        assert_eq!(tracker.accept_latest(), None);
        push(&mut tracker, SubmissionStatus::Accepted, 5);
        let solution = tracker.accept_latest().unwrap();
        assert_eq!(solution.wrong_attempts, 1);
        assert_eq!(solution.accepted_at, 5);
        assert_eq!(solution.penalty(), 25);
    }

    #[test]
    fn test_solution_is_write_once() {
        let mut tracker = ProblemTracker::new();
        push(&mut tracker, SubmissionStatus::Accepted, 10);
        tracker.accept_latest();
        push(&mut tracker, SubmissionStatus::WrongAnswer, 11);
        push(&mut tracker, SubmissionStatus::Accepted, 12);
        assert_eq!(tracker.accept_latest(), None);
        assert_eq!(tracker.solution().unwrap().accepted_at, 10);
        assert_eq!(tracker.cell(false).to_string(), "+");
    }

    #[test]
    fn test_freeze_skips_solved_problems() {
        let mut tracker = ProblemTracker::new();
        push(&mut tracker, SubmissionStatus::Accepted, 10);
        tracker.accept_latest();
        tracker.freeze();
        push(&mut tracker, SubmissionStatus::WrongAnswer, 50);
        assert!(!tracker.is_eligible_freeze());
        assert!(!tracker.has_pending_reveal());
        assert_eq!(tracker.reveal(), None);
    }

    #[test]
    fn test_reveal_adds_pre_freeze_failures_once() {
        let mut tracker = ProblemTracker::new();
        push(&mut tracker, SubmissionStatus::WrongAnswer, 1);
        push(&mut tracker, SubmissionStatus::RuntimeError, 2);
        tracker.freeze();
        assert_eq!(tracker.freeze_start_index(), 2);
        push(&mut tracker, SubmissionStatus::TimeLimitExceed, 60);
        push(&mut tracker, SubmissionStatus::Accepted, 70);
        push(&mut tracker, SubmissionStatus::WrongAnswer, 80);

        assert_eq!(tracker.cell(true).to_string(), "-2/3");
        let solution = tracker.reveal().unwrap();
        assert_eq!(solution.wrong_attempts, 3);
        assert_eq!(solution.accepted_at, 70);
        assert_eq!(solution.penalty(), 130);
        assert!(!tracker.is_eligible_freeze());
    }

    #[test]
    fn test_reveal_without_accept_stays_unsolved() {
        let mut tracker = ProblemTracker::new();
        tracker.freeze();
        push(&mut tracker, SubmissionStatus::WrongAnswer, 60);
        assert_eq!(tracker.cell(true).to_string(), "0/1");
        assert_eq!(tracker.reveal(), None);
        assert!(!tracker.is_solved());
        assert_eq!(tracker.cell(false).to_string(), "-1");
    }

    #[test]
    fn test_cells() {
        assert_eq!(ProblemCell::Solved { wrong_attempts: 0 }.to_string(), "+");
        assert_eq!(ProblemCell::Solved { wrong_attempts: 3 }.to_string(), "+3");
        assert_eq!(ProblemCell::Frozen { failed: 0, pending: 2 }.to_string(), "0/2");
        assert_eq!(ProblemCell::Frozen { failed: 1, pending: 2 }.to_string(), "-1/2");
        assert_eq!(ProblemCell::Attempted { failed: 0 }.to_string(), ".");
        assert_eq!(ProblemCell::Attempted { failed: 4 }.to_string(), "-4");
    }

    #[test]
    fn test_frozen_cell_without_pending_shows_plain_failures() {
        let mut tracker = ProblemTracker::new();
        push(&mut tracker, SubmissionStatus::WrongAnswer, 1);
        tracker.freeze();
        assert_eq!(tracker.cell(true).to_string(), "-1");
    }
}
