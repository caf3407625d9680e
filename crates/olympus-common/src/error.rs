//! Contest error types shared by the scoreboard engine and its adapters.

use thiserror::Error;

/// Rejections raised by scoreboard operations.
///
/// The display text is the reason shown after `<Operation> failed: `.
/// A rejected operation leaves the scoreboard untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContestError {
    /// Team name already registered
    #[error("duplicated team name")]
    DuplicateTeamName,

    /// Registration or start attempted after the contest began
    #[error("competition has started")]
    CompetitionAlreadyStarted,

    /// Query for a team that was never registered
    #[error("cannot find the team")]
    TeamNotFound,

    /// Freeze requested while already frozen
    #[error("scoreboard has been frozen")]
    ScoreboardAlreadyFrozen,

    /// Scroll requested without a freeze
    #[error("scoreboard has not been frozen")]
    ScoreboardNotFrozen,
}

impl ContestError {
    /// Returns the error code string for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ContestError::DuplicateTeamName => "DUPLICATE_TEAM_NAME",
            ContestError::CompetitionAlreadyStarted => "COMPETITION_ALREADY_STARTED",
            ContestError::TeamNotFound => "TEAM_NOT_FOUND",
            ContestError::ScoreboardAlreadyFrozen => "SCOREBOARD_ALREADY_FROZEN",
            ContestError::ScoreboardNotFrozen => "SCOREBOARD_NOT_FROZEN",
        }
    }
}

/// Result type alias using ContestError
pub type ContestResult<T> = Result<T, ContestError>;
