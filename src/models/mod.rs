//! Domain models
//!
//! Submissions, per-problem trackers, teams and the published ranking values.

pub mod problem;
pub mod ranking;
pub mod submission;
pub mod team;

pub use problem::*;
pub use ranking::*;
pub use submission::*;
pub use team::*;
