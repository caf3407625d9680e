//! Scroll: unveiling the frozen board from the bottom up

use olympus_common::{ContestError, ContestResult, ProblemId};

use crate::models::{RankChange, ScrollReport, TeamId};
use crate::services::ranking_index::RankKey;
use crate::services::scoreboard::Scoreboard;

impl Scoreboard {
    /// Reveal every frozen problem, worst-ranked team first.
    ///
    /// Each step reveals the lowest-lettered pending problem of the
    /// worst-ranked team that still has one, re-ranks that team and records
    /// a [`RankChange`] when it climbs. Ends with the board unfrozen.
    pub fn scroll(&mut self) -> ContestResult<ScrollReport> {
        if !self.state.is_frozen() {
            return Err(ContestError::ScoreboardNotFrozen);
        }

        self.recompute();
        self.publish();
        let before = self.board();
        let mut changes = Vec::new();
        let mut steps = 0usize;

        while let Some((id, problem, old_rank)) = self.next_reveal() {
            steps += 1;
            let team = &mut self.teams[id];
            let solution = team.reveal(problem);
            let new_rank = self.ranking.upsert(RankKey::for_team(team));

            tracing::debug!(
                team = team.name(),
                %problem,
                solved = solution.is_some(),
                old_rank,
                new_rank,
                "Problem revealed"
            );

            if new_rank < old_rank {
                let passed = self
                    .snapshot
                    .as_ref()
                    .and_then(|snapshot| snapshot.team_at(new_rank));
                if let Some(passed) = passed {
                    let metrics = team.metrics();
                    changes.push(RankChange {
                        team: team.name().to_string(),
                        passed: passed.to_string(),
                        solved: metrics.solved,
                        penalty: metrics.penalty,
                    });
                }
            }
            self.publish();
        }

        self.state.unfreeze();
        for team in &mut self.teams {
            team.clear_freeze();
        }
        let after = self.board();

        tracing::info!(steps, rank_changes = changes.len(), "Scoreboard scrolled");
        Ok(ScrollReport {
            before,
            changes,
            after,
        })
    }

    /// Worst-ranked team with a pending reveal, its problem and current rank.
    ///
    /// Eligible problems without frozen submissions are never selected; their
    /// eligibility is dropped when the scroll ends.
    fn next_reveal(&self) -> Option<(TeamId, ProblemId, usize)> {
        let total = self.ranking.len();
        self.ranking
            .iter()
            .rev()
            .enumerate()
            .find_map(|(from_bottom, id)| {
                let problem = self.teams[id].first_pending_problem()?;
                Some((id, problem, total - from_bottom))
            })
    }

    /// Frozen problems still waiting to be revealed, across all teams
    pub fn pending_reveals(&self) -> usize {
        self.teams.iter().map(|team| team.pending_reveals()).sum()
    }
}
