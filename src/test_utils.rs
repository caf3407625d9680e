//! Test fixtures shared by the engine and handler tests

use olympus_common::ProblemId;

use crate::handlers::response::format_board_row;
use crate::models::BoardRow;
use crate::services::Scoreboard;

/// Problem id from its letter
pub fn problem(letter: char) -> ProblemId {
    ProblemId::from_letter(letter).expect("problem letter must be A-Z")
}

/// Scoreboard with the given teams registered and the contest started
pub fn started_board(teams: &[&str], problem_count: usize) -> Scoreboard {
    let mut board = Scoreboard::default();
    for team in teams {
        board.add_team(team).expect("fixture team names must be unique");
    }
    board
        .start(300, problem_count)
        .expect("fixture board starts once");
    board
}

/// Render rows the way the protocol prints them
pub fn rows_to_lines(rows: &[BoardRow]) -> Vec<String> {
    rows.iter().map(format_board_row).collect()
}

/// Current board of a scoreboard, rendered
pub fn board_lines(board: &Scoreboard) -> Vec<String> {
    rows_to_lines(&board.board())
}
