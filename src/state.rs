//! Contest lifecycle state
//!
//! The scoreboard owns exactly one `ContestState`. Commands are applied one
//! at a time, so the state needs no synchronization.

use olympus_common::{ContestError, ContestResult};

/// Lifecycle of a contest; `frozen` hides new results in either phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestPhase {
    /// Teams may still register
    Unstarted { frozen: bool },
    /// Submissions are being judged
    Running { frozen: bool },
}

impl Default for ContestPhase {
    fn default() -> Self {
        Self::Unstarted { frozen: false }
    }
}

/// Global contest settings and counters
#[derive(Debug, Clone, Default)]
pub struct ContestState {
    phase: ContestPhase,
    duration: u32,
    problem_count: usize,
    last_seq: u64,
}

impl ContestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ContestPhase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, ContestPhase::Running { .. })
    }

    pub fn is_frozen(&self) -> bool {
        match self.phase {
            ContestPhase::Unstarted { frozen } | ContestPhase::Running { frozen } => frozen,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn problem_count(&self) -> usize {
        self.problem_count
    }

    /// Fix duration and problem count; only once. A freeze already in place stays.
    pub fn start(&mut self, duration: u32, problem_count: usize) -> ContestResult<()> {
        if self.is_started() {
            return Err(ContestError::CompetitionAlreadyStarted);
        }
        self.phase = ContestPhase::Running {
            frozen: self.is_frozen(),
        };
        self.duration = duration;
        self.problem_count = problem_count;
        Ok(())
    }

    pub fn freeze(&mut self) -> ContestResult<()> {
        if self.is_frozen() {
            return Err(ContestError::ScoreboardAlreadyFrozen);
        }
        self.set_frozen(true);
        Ok(())
    }

    pub fn unfreeze(&mut self) {
        self.set_frozen(false);
    }

    fn set_frozen(&mut self, frozen: bool) {
        self.phase = match self.phase {
            ContestPhase::Unstarted { .. } => ContestPhase::Unstarted { frozen },
            ContestPhase::Running { .. } => ContestPhase::Running { frozen },
        };
    }

    /// Hand out the next submission sequence number (starting at 1)
    pub fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        let mut state = ContestState::new();
        assert_eq!(state.phase(), ContestPhase::Unstarted { frozen: false });

        state.start(300, 5).unwrap();
        assert_eq!(state.phase(), ContestPhase::Running { frozen: false });
        assert_eq!(state.start(10, 1), Err(ContestError::CompetitionAlreadyStarted));
        assert_eq!(state.duration(), 300);
        assert_eq!(state.problem_count(), 5);

        state.freeze().unwrap();
        assert!(state.is_frozen());
        assert_eq!(state.freeze(), Err(ContestError::ScoreboardAlreadyFrozen));
        state.unfreeze();
        assert!(!state.is_frozen());
        assert!(state.is_started());
    }

    #[test]
    fn test_freeze_before_start_carries_into_running() {
        let mut state = ContestState::new();
        state.freeze().unwrap();
        assert_eq!(state.phase(), ContestPhase::Unstarted { frozen: true });
        assert_eq!(state.freeze(), Err(ContestError::ScoreboardAlreadyFrozen));

        state.start(300, 2).unwrap();
        assert_eq!(state.phase(), ContestPhase::Running { frozen: true });
        state.unfreeze();
        assert_eq!(state.phase(), ContestPhase::Running { frozen: false });
    }

    #[test]
    fn test_sequence_is_strictly_increasing() {
        let mut state = ContestState::new();
        assert_eq!(state.next_seq(), 1);
        assert_eq!(state.next_seq(), 2);
        assert_eq!(state.next_seq(), 3);
    }
}
