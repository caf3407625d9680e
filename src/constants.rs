//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SCORING
// =============================================================================

/// Penalty time for wrong submission in ICPC mode (in minutes)
pub const ICPC_PENALTY_MINUTES: u64 = 20;

/// Default number of problem slots before a contest starts
pub const DEFAULT_MAX_PROBLEMS: usize = olympus_common::MAX_PROBLEMS;

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log output format
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

// =============================================================================
// PROTOCOL
// =============================================================================

/// Command keywords, one per input line
pub mod commands {
    pub const ADD_TEAM: &str = "ADDTEAM";
    pub const START: &str = "START";
    pub const SUBMIT: &str = "SUBMIT";
    pub const FLUSH: &str = "FLUSH";
    pub const FREEZE: &str = "FREEZE";
    pub const SCROLL: &str = "SCROLL";
    pub const QUERY_RANKING: &str = "QUERY_RANKING";
    pub const QUERY_SUBMISSION: &str = "QUERY_SUBMISSION";
    pub const END: &str = "END";
}

/// Wildcard accepted by submission query filters
pub const FILTER_ALL: &str = "ALL";

/// Fixed response lines
pub mod messages {
    pub const ADD_TEAM_OK: &str = "[Info]Add successfully.";
    pub const START_OK: &str = "[Info]Competition starts.";
    pub const FLUSH_OK: &str = "[Info]Flush scoreboard.";
    pub const FREEZE_OK: &str = "[Info]Freeze scoreboard.";
    pub const SCROLL_OK: &str = "[Info]Scroll scoreboard.";
    pub const QUERY_RANKING_OK: &str = "[Info]Complete query ranking.";
    pub const QUERY_SUBMISSION_OK: &str = "[Info]Complete query submission.";
    pub const END_OK: &str = "[Info]Competition ends.";
    pub const FROZEN_WARNING: &str =
        "[Warning]Scoreboard is frozen. The ranking may be inaccurate until it were scrolled.";
    pub const NO_SUBMISSION: &str = "Cannot find any submission.";
}
