//! Command dispatch
//!
//! Applies one parsed command to the scoreboard and collects the lines to print.

use olympus_common::ContestError;

use crate::constants::messages;
use crate::handlers::request::Command;
use crate::handlers::response::{
    Operation, format_failure, format_ranking, format_submission, scroll_lines,
};
use crate::services::Scoreboard;

/// Output of one command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    /// Set by `END`; no further commands are read
    pub terminate: bool,
}

impl Reply {
    fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            terminate: false,
        }
    }

    fn silent() -> Self {
        Self::default()
    }

    fn failure(operation: Operation, error: ContestError) -> Self {
        tracing::warn!(
            operation = operation.as_str(),
            code = error.error_code(),
            "Command rejected: {}",
            error
        );
        Self::line(format_failure(operation, &error))
    }
}

/// Apply a command to the scoreboard
pub fn handle(board: &mut Scoreboard, command: Command) -> Reply {
    match command {
        Command::AddTeam { name } => match board.add_team(&name) {
            Ok(_) => Reply::line(messages::ADD_TEAM_OK),
            Err(e) => Reply::failure(Operation::Add, e),
        },
        Command::Start {
            duration,
            problem_count,
        } => match board.start(duration, problem_count) {
            Ok(()) => Reply::line(messages::START_OK),
            Err(e) => Reply::failure(Operation::Start, e),
        },
        Command::Submit {
            problem,
            team,
            status,
            time,
        } => {
            // SUBMIT has no failure output
            if let Err(e) = board.submit(problem, &team, status, time) {
                tracing::warn!(team = %team, code = e.error_code(), "Submission dropped: {}", e);
            }
            Reply::silent()
        }
        Command::Flush => {
            board.flush();
            Reply::line(messages::FLUSH_OK)
        }
        Command::Freeze => match board.freeze() {
            Ok(()) => Reply::line(messages::FREEZE_OK),
            Err(e) => Reply::failure(Operation::Freeze, e),
        },
        Command::Scroll => match board.scroll() {
            Ok(report) => {
                if tracing::enabled!(tracing::Level::TRACE) {
                    match serde_json::to_string(&report) {
                        Ok(json) => tracing::trace!(report = %json, "Scroll report"),
                        Err(e) => tracing::trace!("Scroll report not serializable: {}", e),
                    }
                }
                let mut lines = vec![messages::SCROLL_OK.to_string()];
                lines.extend(scroll_lines(&report));
                Reply {
                    lines,
                    terminate: false,
                }
            }
            Err(e) => Reply::failure(Operation::Scroll, e),
        },
        Command::QueryRanking { team } => match board.query_ranking(&team) {
            Ok(query) => {
                let mut lines = vec![messages::QUERY_RANKING_OK.to_string()];
                if query.stale {
                    lines.push(messages::FROZEN_WARNING.to_string());
                }
                lines.push(format_ranking(&team, query.rank));
                Reply {
                    lines,
                    terminate: false,
                }
            }
            Err(e) => Reply::failure(Operation::QueryRanking, e),
        },
        Command::QuerySubmission {
            team,
            problem,
            status,
        } => match board.query_submission(&team, problem, status) {
            Ok(found) => {
                let answer = match found {
                    Some(submission) => format_submission(&team, &submission),
                    None => messages::NO_SUBMISSION.to_string(),
                };
                Reply {
                    lines: vec![messages::QUERY_SUBMISSION_OK.to_string(), answer],
                    terminate: false,
                }
            }
            Err(e) => Reply::failure(Operation::QuerySubmission, e),
        },
        Command::End => {
            tracing::info!("Competition ended");
            Reply {
                lines: vec![messages::END_OK.to_string()],
                terminate: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed raw lines through parse + handle, collecting every printed line
    fn run(script: &[&str]) -> Vec<String> {
        let mut board = Scoreboard::default();
        let mut out = Vec::new();
        for line in script {
            if let Some(command) = Command::parse(line).unwrap() {
                let reply = handle(&mut board, command);
                out.extend(reply.lines);
                if reply.terminate {
                    break;
                }
            }
        }
        out
    }

    #[test]
    fn test_registration_and_start_messages() {
        let out = run(&[
            "ADDTEAM a",
            "ADDTEAM a",
            "START DURATION 300 PROBLEM 2",
            "START DURATION 300 PROBLEM 2",
            "ADDTEAM b",
        ]);
        assert_eq!(
            out,
            vec![
                "[Info]Add successfully.",
                "[Error]Add failed: duplicated team name.",
                "[Info]Competition starts.",
                "[Error]Start failed: competition has started.",
                "[Error]Add failed: competition has started.",
            ]
        );
    }

    #[test]
    fn test_freeze_and_scroll_messages() {
        let out = run(&[
            "ADDTEAM a",
            "START DURATION 300 PROBLEM 1",
            "SCROLL",
            "FREEZE",
            "FREEZE",
        ]);
        assert_eq!(
            out,
            vec![
                "[Info]Add successfully.",
                "[Info]Competition starts.",
                "[Error]Scroll failed: scoreboard has not been frozen.",
                "[Info]Freeze scoreboard.",
                "[Error]Freeze failed: scoreboard has been frozen.",
            ]
        );
    }

    #[test]
    fn test_freeze_before_start() {
        let out = run(&[
            "ADDTEAM a",
            "FREEZE",
            "START DURATION 300 PROBLEM 1",
            "FREEZE",
            "SCROLL",
            "END",
        ]);
        assert_eq!(
            out,
            vec![
                "[Info]Add successfully.",
                "[Info]Freeze scoreboard.",
                "[Info]Competition starts.",
                "[Error]Freeze failed: scoreboard has been frozen.",
                "[Info]Scroll scoreboard.",
                "a 1 0 0 .",
                "a 1 0 0 .",
                "[Info]Competition ends.",
            ]
        );
    }

    #[test]
    fn test_queries() {
        let out = run(&[
            "ADDTEAM T",
            "START DURATION 300 PROBLEM 2",
            "SUBMIT A BY T WITH Wrong_Answer AT 1",
            "SUBMIT B BY T WITH Wrong_Answer AT 2",
            "FREEZE",
            "SUBMIT A BY T WITH Accepted AT 3",
            "QUERY_SUBMISSION T WHERE PROBLEM=ALL AND STATUS=ALL",
            "QUERY_SUBMISSION T WHERE PROBLEM=B AND STATUS=Accepted",
            "QUERY_SUBMISSION X WHERE PROBLEM=ALL AND STATUS=ALL",
            "QUERY_RANKING T",
            "QUERY_RANKING X",
            "END",
            "FLUSH",
        ]);
        assert_eq!(
            out,
            vec![
                "[Info]Add successfully.",
                "[Info]Competition starts.",
                "[Info]Freeze scoreboard.",
                "[Info]Complete query submission.",
                "T A Accepted 3",
                "[Info]Complete query submission.",
                "Cannot find any submission.",
                "[Error]Query submission failed: cannot find the team.",
                "[Info]Complete query ranking.",
                "[Warning]Scoreboard is frozen. The ranking may be inaccurate until it were scrolled.",
                "T NOW AT RANKING 1",
                "[Error]Query ranking failed: cannot find the team.",
                "[Info]Competition ends.",
            ]
        );
    }

    #[test]
    fn test_full_scroll_output() {
        let out = run(&[
            "ADDTEAM A",
            "ADDTEAM B",
            "ADDTEAM C",
            "START DURATION 300 PROBLEM 2",
            "SUBMIT A BY A WITH Accepted AT 10",
            "SUBMIT A BY B WITH Wrong_Answer AT 3",
            "SUBMIT A BY B WITH Accepted AT 5",
            "FLUSH",
            "FREEZE",
            "SUBMIT B BY C WITH Accepted AT 240",
            "SUBMIT B BY B WITH Accepted AT 250",
            "SCROLL",
            "QUERY_RANKING B",
        ]);
        assert_eq!(
            out[4..],
            [
                "[Info]Flush scoreboard.",
                "[Info]Freeze scoreboard.",
                "[Info]Scroll scoreboard.",
                "A 1 1 10 + .",
                "B 2 1 25 +1 0/1",
                "C 3 0 0 . 0/1",
                "B A 2 275",
                "B 1 2 275 +1 +",
                "A 2 1 10 + .",
                "C 3 1 240 . +",
                "[Info]Complete query ranking.",
                "B NOW AT RANKING 1",
            ]
        );
    }
}
