//! Response lines
//!
//! Turns scoreboard results into the text protocol written to stdout.

use olympus_common::ContestError;

use crate::models::{BoardRow, RankChange, ScrollReport, Submission};

/// Operation names used in failure lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Start,
    Freeze,
    Scroll,
    QueryRanking,
    QuerySubmission,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Start => "Start",
            Operation::Freeze => "Freeze",
            Operation::Scroll => "Scroll",
            Operation::QueryRanking => "Query ranking",
            Operation::QuerySubmission => "Query submission",
        }
    }
}

/// `[Error]<Operation> failed: <reason>.`
pub fn format_failure(operation: Operation, error: &ContestError) -> String {
    format!("[Error]{} failed: {}.", operation.as_str(), error)
}

/// `<name> <rank> <solved> <penalty> <cell>...`
pub fn format_board_row(row: &BoardRow) -> String {
    let mut line = format!("{} {} {} {}", row.name, row.rank, row.solved, row.penalty);
    for cell in &row.cells {
        line.push(' ');
        line.push_str(&cell.to_string());
    }
    line
}

/// `<team> <passed team> <solved> <penalty>`
pub fn format_rank_change(change: &RankChange) -> String {
    format!(
        "{} {} {} {}",
        change.team, change.passed, change.solved, change.penalty
    )
}

pub fn format_ranking(team: &str, rank: usize) -> String {
    format!("{} NOW AT RANKING {}", team, rank)
}

pub fn format_submission(team: &str, submission: &Submission) -> String {
    format!(
        "{} {} {} {}",
        team, submission.problem, submission.status, submission.time
    )
}

/// Pre-reveal board, climbs, then the final board
pub fn scroll_lines(report: &ScrollReport) -> impl Iterator<Item = String> + '_ {
    report
        .before
        .iter()
        .map(format_board_row)
        .chain(report.changes.iter().map(format_rank_change))
        .chain(report.after.iter().map(format_board_row))
}
