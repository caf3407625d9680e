//! Command parsing
//!
//! One command per input line. Malformed lines are rejected here and never
//! reach the scoreboard.

use std::sync::LazyLock;

use olympus_common::{ProblemFilter, ProblemId, StatusFilter, SubmissionStatus};
use regex::Regex;

use crate::constants::{FILTER_ALL, commands};
use crate::error::{AppError, AppResult};
use crate::utils::validation::{validate_problem_label, validate_team_name};

static START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^START\s+DURATION\s+(\d+)\s+PROBLEM\s+(\d+)$").expect("valid START pattern")
});

static SUBMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^SUBMIT\s+(\S+)\s+BY\s+(\S+)\s+WITH\s+(\S+)\s+AT\s+(\d+)$")
        .expect("valid SUBMIT pattern")
});

static QUERY_SUBMISSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^QUERY_SUBMISSION\s+(\S+)\s+WHERE\s+PROBLEM=(\S+)\s+AND\s+STATUS=(\S+)$")
        .expect("valid QUERY_SUBMISSION pattern")
});

/// A parsed contest command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTeam {
        name: String,
    },
    Start {
        duration: u32,
        problem_count: usize,
    },
    Submit {
        problem: ProblemId,
        team: String,
        status: SubmissionStatus,
        time: u32,
    },
    Flush,
    Freeze,
    Scroll,
    QueryRanking {
        team: String,
    },
    QuerySubmission {
        team: String,
        problem: ProblemFilter,
        status: StatusFilter,
    },
    End,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim();
        let Some(keyword) = line.split_whitespace().next() else {
            return Ok(None);
        };

        let command = match keyword {
            commands::ADD_TEAM => Command::AddTeam {
                name: single_argument(line)?,
            },
            commands::START => {
                let caps = captures(&START_RE, line)?;
                Command::Start {
                    duration: parse_number(&caps[1], "duration")?,
                    problem_count: parse_number(&caps[2], "problem count")?,
                }
            }
            commands::SUBMIT => {
                let caps = captures(&SUBMIT_RE, line)?;
                Command::Submit {
                    problem: validate_problem_label(&caps[1]).map_err(invalid)?,
                    team: validate_team_name(&caps[2]).map_err(invalid)?.to_string(),
                    status: caps[3].parse().map_err(invalid)?,
                    time: parse_number(&caps[4], "time")?,
                }
            }
            commands::FLUSH => bare(line, Command::Flush)?,
            commands::FREEZE => bare(line, Command::Freeze)?,
            commands::SCROLL => bare(line, Command::Scroll)?,
            commands::QUERY_RANKING => Command::QueryRanking {
                team: single_argument(line)?,
            },
            commands::QUERY_SUBMISSION => {
                let caps = captures(&QUERY_SUBMISSION_RE, line)?;
                Command::QuerySubmission {
                    team: validate_team_name(&caps[1]).map_err(invalid)?.to_string(),
                    problem: parse_problem_filter(&caps[2])?,
                    status: parse_status_filter(&caps[3])?,
                }
            }
            commands::END => bare(line, Command::End)?,
            other => {
                return Err(AppError::InvalidCommand(format!("unknown command: {}", other)));
            }
        };
        Ok(Some(command))
    }
}

fn invalid(reason: impl std::fmt::Display) -> AppError {
    AppError::InvalidCommand(reason.to_string())
}

fn captures<'a>(re: &Regex, line: &'a str) -> AppResult<regex::Captures<'a>> {
    re.captures(line)
        .ok_or_else(|| AppError::InvalidCommand(format!("malformed command: {}", line)))
}

fn parse_number<T: std::str::FromStr>(raw: &str, what: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::InvalidCommand(format!("invalid {}: {}", what, raw)))
}

/// Keyword followed by exactly one team name
fn single_argument(line: &str) -> AppResult<String> {
    let mut parts = line.split_whitespace().skip(1);
    match (parts.next(), parts.next()) {
        (Some(name), None) => Ok(validate_team_name(name).map_err(invalid)?.to_string()),
        _ => Err(AppError::InvalidCommand(format!("expected one team name: {}", line))),
    }
}

/// Keyword with no arguments
fn bare(line: &str, command: Command) -> AppResult<Command> {
    if line.split_whitespace().count() == 1 {
        Ok(command)
    } else {
        Err(AppError::InvalidCommand(format!("unexpected arguments: {}", line)))
    }
}

fn parse_problem_filter(raw: &str) -> AppResult<ProblemFilter> {
    if raw == FILTER_ALL {
        return Ok(ProblemFilter::All);
    }
    validate_problem_label(raw)
        .map(ProblemFilter::Only)
        .map_err(invalid)
}

fn parse_status_filter(raw: &str) -> AppResult<StatusFilter> {
    if raw == FILTER_ALL {
        return Ok(StatusFilter::All);
    }
    raw.parse()
        .map(StatusFilter::Only)
        .map_err(invalid)
}
