//! Scoreboard engine
//!
//! Owns every team, the ranking index and the last published snapshot, and
//! applies contest commands one at a time. Reveal (scroll) lives in
//! [`crate::services::reveal`].

use std::collections::HashMap;

use olympus_common::{
    ContestError, ContestResult, ProblemFilter, ProblemId, StatusFilter, SubmissionStatus,
};

use crate::constants::DEFAULT_MAX_PROBLEMS;
use crate::models::{BoardRow, RankingQuery, RankingSnapshot, Solution, Submission, Team, TeamId};
use crate::services::ranking_index::{RankKey, RankingIndex};
use crate::state::ContestState;

/// What a submission did to the visible board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First accept on an open board: metrics and rank changed
    Solved(Solution),
    /// Logged with no visible effect
    Recorded,
    /// Logged behind the freeze, revealed on scroll
    Hidden,
}

/// The ranking-and-reveal engine
#[derive(Debug)]
pub struct Scoreboard {
    pub(crate) state: ContestState,
    pub(crate) teams: Vec<Team>,
    by_name: HashMap<String, TeamId>,
    pub(crate) ranking: RankingIndex,
    pub(crate) snapshot: Option<RankingSnapshot>,
    max_problems: usize,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROBLEMS)
    }
}

impl Scoreboard {
    /// Create an empty scoreboard; `max_problems` caps the problem count
    pub fn new(max_problems: usize) -> Self {
        Self {
            state: ContestState::new(),
            teams: Vec::new(),
            by_name: HashMap::new(),
            ranking: RankingIndex::new(),
            snapshot: None,
            max_problems: max_problems.clamp(1, olympus_common::MAX_PROBLEMS),
        }
    }

    pub fn state(&self) -> &ContestState {
        &self.state
    }

    pub fn is_frozen(&self) -> bool {
        self.state.is_frozen()
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.by_name.get(name).map(|&id| &self.teams[id])
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Last published ranking, if any flush or scroll happened
    pub fn snapshot(&self) -> Option<&RankingSnapshot> {
        self.snapshot.as_ref()
    }

    /// Register a team before the contest starts
    pub fn add_team(&mut self, name: &str) -> ContestResult<TeamId> {
        if self.state.is_started() {
            return Err(ContestError::CompetitionAlreadyStarted);
        }
        if self.by_name.contains_key(name) {
            return Err(ContestError::DuplicateTeamName);
        }

        let id = self.teams.len();
        let team = Team::new(id, name, self.max_problems);
        self.ranking.upsert(RankKey::for_team(&team));
        self.by_name.insert(name.to_string(), id);
        self.teams.push(team);

        tracing::debug!(team = name, id, "Team registered");
        Ok(id)
    }

    /// Start the contest, fixing duration and problem count
    pub fn start(&mut self, duration: u32, problem_count: usize) -> ContestResult<()> {
        let problem_count = problem_count.min(self.max_problems);
        self.state.start(duration, problem_count)?;
        for team in &mut self.teams {
            team.set_capacity(problem_count);
        }

        tracing::info!(
            duration = self.state.duration(),
            problem_count = self.state.problem_count(),
            teams = self.teams.len(),
            "Competition started"
        );
        Ok(())
    }

    /// Log a submission and, on an open board, apply a first accept
    pub fn submit(
        &mut self,
        problem: ProblemId,
        team_name: &str,
        status: SubmissionStatus,
        time: u32,
    ) -> ContestResult<SubmitOutcome> {
        let id = *self
            .by_name
            .get(team_name)
            .ok_or(ContestError::TeamNotFound)?;

        let submission = Submission {
            problem,
            status,
            time,
            seq: self.state.next_seq(),
        };
        let team = &mut self.teams[id];
        team.record(submission);

        if self.state.is_frozen() {
            tracing::debug!(team = team_name, %problem, %status, time, "Submission hidden by freeze");
            return Ok(SubmitOutcome::Hidden);
        }

        let Some(solution) = team.accept_latest(problem) else {
            return Ok(SubmitOutcome::Recorded);
        };
        let rank = self.ranking.upsert(RankKey::for_team(team));

        tracing::debug!(
            team = team_name,
            %problem,
            time,
            wrong_attempts = solution.wrong_attempts,
            rank,
            "Problem solved"
        );
        Ok(SubmitOutcome::Solved(solution))
    }

    /// Recompute every team from revealed state and publish a new snapshot
    pub fn flush(&mut self) -> &RankingSnapshot {
        self.recompute();
        self.publish()
    }

    /// Hide further results of every unsolved problem.
    ///
    /// Before `start` there are no live problems, so nothing becomes
    /// eligible for reveal.
    pub fn freeze(&mut self) -> ContestResult<()> {
        self.state.freeze()?;
        if self.state.is_started() {
            for team in &mut self.teams {
                team.freeze();
            }
        }

        tracing::info!(started = self.state.is_started(), "Scoreboard frozen");
        Ok(())
    }

    /// Rank of a team in the last snapshot, or by name before any flush
    pub fn query_ranking(&self, team_name: &str) -> ContestResult<RankingQuery> {
        if !self.by_name.contains_key(team_name) {
            return Err(ContestError::TeamNotFound);
        }
        Ok(RankingQuery {
            rank: self.published_rank(team_name),
            stale: self.state.is_frozen(),
        })
    }

    /// Most recent submission of a team matching the filters.
    ///
    /// Frozen submissions are included; queries never respect the freeze.
    pub fn query_submission(
        &self,
        team_name: &str,
        problem: ProblemFilter,
        status: StatusFilter,
    ) -> ContestResult<Option<Submission>> {
        let team = self.team(team_name).ok_or(ContestError::TeamNotFound)?;
        Ok(team.latest_submission(problem, status).copied())
    }

    /// Current board, in ranking order
    pub fn board(&self) -> Vec<BoardRow> {
        let frozen = self.state.is_frozen();
        self.ranking
            .iter()
            .map(|id| {
                let team = &self.teams[id];
                let metrics = team.metrics();
                BoardRow {
                    name: team.name().to_string(),
                    rank: self.published_rank(team.name()),
                    solved: metrics.solved,
                    penalty: metrics.penalty,
                    cells: team.cells(frozen),
                }
            })
            .collect()
    }

    /// Rebuild every team's metrics and the index from revealed state
    pub(crate) fn recompute(&mut self) {
        for team in &mut self.teams {
            team.recompute_metrics();
        }
        self.ranking.rebuild(self.teams.iter().map(RankKey::for_team));
    }

    /// Publish the index order as the current snapshot
    pub(crate) fn publish(&mut self) -> &RankingSnapshot {
        self.snapshot.insert(self.ranking.snapshot())
    }

    fn published_rank(&self, name: &str) -> usize {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.rank_of(name))
            .unwrap_or_else(|| self.name_rank(name))
    }

    /// Rank by name alone, used before the first snapshot
    fn name_rank(&self, name: &str) -> usize {
        self.teams.iter().filter(|t| t.name() < name).count() + 1
    }
}
