//! Scoreboard - ICPC-Style Contest Scoreboard
//!
//! This library provides the scoreboard engine behind the `scoreboard` binary:
//! teams, submissions, ranking, and the frozen-board reveal.
//!
//! # Features
//!
//! - ICPC ranking (solved count, penalty, accept-time tiebreak, team name)
//! - Explicit flush of the published ranking
//! - Scoreboard freeze with hidden results
//! - Scroll reveal reporting every rank climb
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: line protocol parsing and formatting (thin layer)
//! - **Services**: scoreboard engine and ranking index
//! - **Models**: submissions, problem trackers, teams and ranking values
//! - **Session**: async driver over an input stream

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::Scoreboard;
pub use state::ContestPhase;
