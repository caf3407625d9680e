//! Published ranking values

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::problem::ProblemCell;

/// Immutable copy of the ranking as of the last flush or scroll step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSnapshot {
    /// Team names, best first
    order: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl RankingSnapshot {
    pub fn from_order(order: Vec<String>) -> Self {
        let ranks = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i + 1))
            .collect();
        Self { order, ranks }
    }

    /// 1-based rank of a team
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Team holding a 1-based rank
    pub fn team_at(&self, rank: usize) -> Option<&str> {
        rank.checked_sub(1)
            .and_then(|i| self.order.get(i))
            .map(String::as_str)
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }
}

/// A reveal that moved a team up the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankChange {
    pub team: String,
    /// Team that held the new rank before the reveal
    pub passed: String,
    pub solved: u32,
    pub penalty: u64,
}

/// One scoreboard line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRow {
    pub name: String,
    pub rank: usize,
    pub solved: u32,
    pub penalty: u64,
    pub cells: Vec<ProblemCell>,
}

/// Everything a scroll produces, in output order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollReport {
    /// Board after the initial recompute, still frozen
    pub before: Vec<BoardRow>,
    pub changes: Vec<RankChange>,
    /// Board once every frozen problem is revealed
    pub after: Vec<BoardRow>,
}

/// Answer to a ranking query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingQuery {
    pub rank: usize,
    /// Set while frozen submissions may be missing from the rank
    pub stale: bool,
}
