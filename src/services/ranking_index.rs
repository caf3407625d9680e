//! Ordered index over teams' visible metrics

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::models::{RankingSnapshot, Team, TeamId, VisibleMetrics};

/// Sort key for one team, copied out of its visible metrics.
///
/// Ordering is a strict total order: better teams compare `Less`, and two
/// distinct teams never compare equal because the id is the last tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankKey {
    pub solved: u32,
    pub penalty: u64,
    pub accept_times_desc: Vec<u32>,
    pub name: String,
    pub id: TeamId,
}

impl RankKey {
    pub fn new(id: TeamId, name: &str, metrics: &VisibleMetrics) -> Self {
        Self {
            solved: metrics.solved,
            penalty: metrics.penalty,
            accept_times_desc: metrics.accept_times_desc.clone(),
            name: name.to_string(),
            id,
        }
    }

    pub fn for_team(team: &Team) -> Self {
        Self::new(team.id(), team.name(), team.metrics())
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .solved
            .cmp(&self.solved)
            .then_with(|| self.penalty.cmp(&other.penalty))
            // Latest solve first: an earlier time at the first difference wins
            .then_with(|| self.accept_times_desc.cmp(&other.accept_times_desc))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Teams ordered best first.
///
/// Each team appears under exactly one key; re-keying removes the stored key
/// before inserting the new one, so the set is never probed with a key whose
/// metrics changed in place.
#[derive(Debug, Default)]
pub struct RankingIndex {
    order: BTreeSet<RankKey>,
    keys: HashMap<TeamId, RankKey>,
}

impl RankingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or re-key a team; returns its 1-based rank
    pub fn upsert(&mut self, key: RankKey) -> usize {
        if let Some(old) = self.keys.remove(&key.id) {
            self.order.remove(&old);
        }
        let rank = self.order.range(..&key).count() + 1;
        self.keys.insert(key.id, key.clone());
        self.order.insert(key);
        rank
    }

    /// Replace the whole index
    pub fn rebuild(&mut self, keys: impl IntoIterator<Item = RankKey>) {
        self.order.clear();
        self.keys.clear();
        for key in keys {
            self.keys.insert(key.id, key.clone());
            self.order.insert(key);
        }
    }

    /// Team ids, best first (reverse for worst first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = TeamId> + ExactSizeIterator + '_ {
        self.order.iter().map(|key| key.id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Freeze the current order into a snapshot
    pub fn snapshot(&self) -> RankingSnapshot {
        RankingSnapshot::from_order(self.order.iter().map(|key| key.name.clone()).collect())
    }
}
