//! Utility functions

pub mod validation;

pub use validation::{validate_problem_label, validate_team_name};
