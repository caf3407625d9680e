//! Common types used across Olympus services.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of problem slots a contest can carry (`A` through `Z`).
pub const MAX_PROBLEMS: usize = 26;

/// Submission status as reported by the judge.
///
/// Exactly one kind, [`SubmissionStatus::Accepted`], counts as a success;
/// every other kind is a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// All tests passed
    #[serde(rename = "Accepted")]
    Accepted,
    /// Output mismatch
    #[serde(rename = "Wrong_Answer")]
    WrongAnswer,
    /// Program crashed
    #[serde(rename = "Runtime_Error")]
    RuntimeError,
    /// Exceeded time limit
    #[serde(rename = "Time_Limit_Exceed")]
    TimeLimitExceed,
}

impl SubmissionStatus {
    /// All statuses, in protocol order
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::Accepted,
        SubmissionStatus::WrongAnswer,
        SubmissionStatus::RuntimeError,
        SubmissionStatus::TimeLimitExceed,
    ];

    /// Protocol name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Accepted => "Accepted",
            SubmissionStatus::WrongAnswer => "Wrong_Answer",
            SubmissionStatus::RuntimeError => "Runtime_Error",
            SubmissionStatus::TimeLimitExceed => "Time_Limit_Exceed",
        }
    }

    /// Check if the status is the success kind
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionStatus::Accepted)
    }

    /// Check if the status is a failure (not accepted)
    pub fn is_failure(&self) -> bool {
        !self.is_accepted()
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not part of the protocol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown submission status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for SubmissionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubmissionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Zero-based problem slot, displayed as a capital letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(u8);

impl ProblemId {
    /// Build from a zero-based index, rejecting anything past `Z`
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_PROBLEMS).then(|| ProblemId(index as u8))
    }

    /// Build from a label such as `'C'`
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Self::new((letter as u8 - b'A') as usize)
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn letter(&self) -> char {
        (b'A' + self.0) as char
    }
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Problem selector for submission queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProblemFilter {
    #[default]
    All,
    Only(ProblemId),
}

impl ProblemFilter {
    pub fn matches(&self, problem: ProblemId) -> bool {
        match self {
            ProblemFilter::All => true,
            ProblemFilter::Only(wanted) => *wanted == problem,
        }
    }
}

/// Status selector for submission queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubmissionStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: SubmissionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}
