//! Submission model

use olympus_common::{ProblemFilter, ProblemId, StatusFilter, SubmissionStatus};
use serde::{Deserialize, Serialize};

/// One judged submission. Never mutated once logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub problem: ProblemId,
    pub status: SubmissionStatus,
    /// Contest-relative minutes, supplied by the caller
    pub time: u32,
    /// Global ingestion order, strictly increasing
    pub seq: u64,
}

impl Submission {
    /// Check the submission against query filters
    pub fn matches(&self, problem: ProblemFilter, status: StatusFilter) -> bool {
        problem.matches(self.problem) && status.matches(self.status)
    }
}

/// Count failed attempts up to (not including) the first accept.
pub fn failures_before_accept(submissions: &[Submission]) -> u32 {
    submissions
        .iter()
        .take_while(|s| s.status.is_failure())
        .count() as u32
}

/// First accepted submission in the slice, if any
pub fn first_accept(submissions: &[Submission]) -> Option<&Submission> {
    submissions.iter().find(|s| s.status.is_accepted())
}
