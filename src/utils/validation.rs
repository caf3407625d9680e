//! Input validation utilities

use olympus_common::ProblemId;

/// Validate team name format
pub fn validate_team_name(name: &str) -> Result<&str, &'static str> {
    if name.is_empty() {
        return Err("Team name cannot be empty");
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("Team name cannot contain whitespace or control characters");
    }
    Ok(name)
}

/// Validate a problem label (`A` to `Z`)
pub fn validate_problem_label(label: &str) -> Result<ProblemId, &'static str> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => ProblemId::from_letter(letter).ok_or("Problem must be a letter from A to Z"),
        _ => Err("Problem must be a single letter"),
    }
}
