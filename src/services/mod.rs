//! Business logic services
//!
//! The scoreboard engine, its ranking index and the scroll reveal.

pub mod ranking_index;
pub mod reveal;
pub mod scoreboard;

pub use ranking_index::{RankKey, RankingIndex};
pub use scoreboard::{Scoreboard, SubmitOutcome};
