//! Shared application state between the Tauri IPC commands.
//!
//! One `CoreState` is created at startup and managed by the Tauri
//! builder. The analysis state machine is the only mutable resource;
//! commands are its only writers, so an `RwLock` with poisoning mapped
//! to an error is all the coordination needed.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::TrainingReport;
use crate::workflow::{AnalysisState, TransitionError};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Internal state lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

pub struct CoreState {
    /// The analysis lifecycle: current file, in-flight run, result set,
    /// and category filter.
    analysis: RwLock<AnalysisState>,
    /// Outcome of the most recent training, whichever command ran it.
    /// Feeds the model-manifest export.
    last_training: RwLock<Option<TrainingReport>>,
}

impl CoreState {
    pub fn new() -> Self {
        Self {
            analysis: RwLock::new(AnalysisState::Idle),
            last_training: RwLock::new(None),
        }
    }

    /// Acquire a read lock on the analysis state.
    pub fn read_analysis(&self) -> Result<RwLockReadGuard<'_, AnalysisState>, CoreError> {
        self.analysis.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the analysis state.
    pub fn write_analysis(&self) -> Result<RwLockWriteGuard<'_, AnalysisState>, CoreError> {
        self.analysis.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Remember the latest training outcome.
    pub fn set_last_training(&self, report: TrainingReport) {
        if let Ok(mut guard) = self.last_training.write() {
            *guard = Some(report);
        }
    }

    /// The latest training outcome, if any command has trained yet.
    pub fn last_training(&self) -> Result<Option<TrainingReport>, CoreError> {
        self.last_training
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| CoreError::LockPoisoned)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Phase;
    use std::path::PathBuf;

    #[test]
    fn fresh_state_is_idle_with_no_training() {
        let state = CoreState::new();
        assert_eq!(state.read_analysis().unwrap().phase(), Phase::Idle);
        assert!(state.last_training().unwrap().is_none());
    }

    #[test]
    fn write_lock_transitions_are_visible_to_readers() {
        let state = CoreState::new();
        state
            .write_analysis()
            .unwrap()
            .select_file(PathBuf::from("batch.csv"))
            .unwrap();
        assert_eq!(state.read_analysis().unwrap().phase(), Phase::FileSelected);
    }

    #[test]
    fn last_training_round_trips() {
        let state = CoreState::new();
        state.set_last_training(TrainingReport {
            accuracy: 0.94,
            n_train: 96,
            n_val: 24,
            model_path: None,
        });
        assert_eq!(state.last_training().unwrap().unwrap().n_train, 96);
    }
}
