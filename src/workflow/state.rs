use std::mem;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::toggle_selection;
use crate::models::AnalysisRun;

/// Rejected state transitions. Each maps to a readable message at the
/// IPC boundary; none of them mutate the machine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransitionError {
    #[error("An analysis is already in flight")]
    AnalysisInFlight,

    #[error("No file selected — choose a CSV first")]
    NoFileSelected,

    #[error("No analysis in flight")]
    NotAnalyzing,

    #[error("No results to filter — run an analysis first")]
    NoResults,
}

/// Phase tag exposed to the frontend status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    FileSelected,
    Analyzing,
    Results,
    Filtered,
    Failed,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::FileSelected => "file_selected",
            Phase::Analyzing => "analyzing",
            Phase::Results => "results",
            Phase::Filtered => "filtered",
            Phase::Failed => "failed",
        }
    }
}

/// The analysis lifecycle, made explicit.
///
/// `Analyzing` and `Failed` carry the previous run so an aborted or
/// failed re-analysis restores it — prior results are only discarded
/// when a new file is chosen or a new run completes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    FileSelected {
        path: PathBuf,
    },
    Analyzing {
        path: PathBuf,
        previous: Option<AnalysisRun>,
    },
    Results {
        run: AnalysisRun,
    },
    Filtered {
        run: AnalysisRun,
        category: String,
    },
    Failed {
        message: String,
        path: Option<PathBuf>,
        previous: Option<AnalysisRun>,
    },
}

impl AnalysisState {
    pub fn phase(&self) -> Phase {
        match self {
            AnalysisState::Idle => Phase::Idle,
            AnalysisState::FileSelected { .. } => Phase::FileSelected,
            AnalysisState::Analyzing { .. } => Phase::Analyzing,
            AnalysisState::Results { .. } => Phase::Results,
            AnalysisState::Filtered { .. } => Phase::Filtered,
            AnalysisState::Failed { .. } => Phase::Failed,
        }
    }

    /// Choose a new input file. Discards any previous results; rejected
    /// only while an analysis is in flight.
    pub fn select_file(&mut self, path: PathBuf) -> Result<(), TransitionError> {
        if matches!(self, AnalysisState::Analyzing { .. }) {
            return Err(TransitionError::AnalysisInFlight);
        }
        *self = AnalysisState::FileSelected { path };
        Ok(())
    }

    /// Enter `Analyzing`, returning the file to analyze. Re-analysis from
    /// `Results`/`Filtered`/`Failed` reuses the run's source file and
    /// keeps the previous run restorable.
    pub fn start_analysis(&mut self) -> Result<PathBuf, TransitionError> {
        match mem::take(self) {
            AnalysisState::FileSelected { path } => {
                *self = AnalysisState::Analyzing {
                    path: path.clone(),
                    previous: None,
                };
                Ok(path)
            }
            AnalysisState::Results { run } => {
                let path = run.source_file.clone();
                *self = AnalysisState::Analyzing {
                    path: path.clone(),
                    previous: Some(run),
                };
                Ok(path)
            }
            AnalysisState::Filtered { run, .. } => {
                let path = run.source_file.clone();
                *self = AnalysisState::Analyzing {
                    path: path.clone(),
                    previous: Some(run),
                };
                Ok(path)
            }
            AnalysisState::Failed {
                path: Some(path),
                previous,
                ..
            } => {
                *self = AnalysisState::Analyzing {
                    path: path.clone(),
                    previous,
                };
                Ok(path)
            }
            state @ AnalysisState::Analyzing { .. } => {
                *self = state;
                Err(TransitionError::AnalysisInFlight)
            }
            state => {
                *self = state;
                Err(TransitionError::NoFileSelected)
            }
        }
    }

    /// A run finished: replace whatever was restorable with its output.
    pub fn complete(&mut self, run: AnalysisRun) -> Result<(), TransitionError> {
        if !matches!(self, AnalysisState::Analyzing { .. }) {
            return Err(TransitionError::NotAnalyzing);
        }
        *self = AnalysisState::Results { run };
        Ok(())
    }

    /// A run failed or was cancelled: record the message, keep the
    /// previous run and the chosen file for retry.
    pub fn fail(&mut self, message: String) -> Result<(), TransitionError> {
        match mem::take(self) {
            AnalysisState::Analyzing { path, previous } => {
                *self = AnalysisState::Failed {
                    message,
                    path: Some(path),
                    previous,
                };
                Ok(())
            }
            state => {
                *self = state;
                Err(TransitionError::NotAnalyzing)
            }
        }
    }

    /// Leave `Failed`, restoring the pre-call state: the previous results
    /// when there were any, otherwise the chosen file, otherwise `Idle`.
    pub fn acknowledge_failure(&mut self) {
        if let AnalysisState::Failed { path, previous, .. } = mem::take(self) {
            *self = match (previous, path) {
                (Some(run), _) => AnalysisState::Results { run },
                (None, Some(path)) => AnalysisState::FileSelected { path },
                (None, None) => AnalysisState::Idle,
            };
        }
    }

    /// Exclusive category toggle over the current results.
    pub fn toggle_category(&mut self, name: &str) -> Result<(), TransitionError> {
        match mem::take(self) {
            AnalysisState::Results { run } => {
                *self = match toggle_selection(None, name) {
                    Some(category) => AnalysisState::Filtered { run, category },
                    None => AnalysisState::Results { run },
                };
                Ok(())
            }
            AnalysisState::Filtered { run, category } => {
                *self = match toggle_selection(Some(&category), name) {
                    Some(category) => AnalysisState::Filtered { run, category },
                    None => AnalysisState::Results { run },
                };
                Ok(())
            }
            state => {
                *self = state;
                Err(TransitionError::NoResults)
            }
        }
    }

    /// The run backing the current view, if any. `Failed` exposes the
    /// retained previous run.
    pub fn current_run(&self) -> Option<&AnalysisRun> {
        match self {
            AnalysisState::Results { run } | AnalysisState::Filtered { run, .. } => Some(run),
            AnalysisState::Failed {
                previous: Some(run),
                ..
            } => Some(run),
            AnalysisState::Analyzing {
                previous: Some(run),
                ..
            } => Some(run),
            _ => None,
        }
    }

    /// The file backing the current or upcoming run, if one is known.
    pub fn source_file(&self) -> Option<&std::path::Path> {
        match self {
            AnalysisState::FileSelected { path } | AnalysisState::Analyzing { path, .. } => {
                Some(path)
            }
            AnalysisState::Failed {
                path: Some(path), ..
            } => Some(path),
            AnalysisState::Results { run } | AnalysisState::Filtered { run, .. } => {
                Some(&run.source_file)
            }
            _ => None,
        }
    }

    /// The active category filter, if one is selected.
    pub fn selected_category(&self) -> Option<&str> {
        match self {
            AnalysisState::Filtered { category, .. } => Some(category),
            _ => None,
        }
    }

    /// The planet list the table should show: the selected card's
    /// membership when filtered, the full run otherwise.
    pub fn visible_planets(&self) -> Vec<crate::models::Planet> {
        match self {
            AnalysisState::Filtered { run, category } => run
                .cards
                .iter()
                .find(|c| &c.name == category)
                .map(|c| c.planets.clone())
                .unwrap_or_default(),
            _ => self
                .current_run()
                .map(|run| run.planets.clone())
                .unwrap_or_default(),
        }
    }

    /// The error message to surface, if the last run failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{batch_stats, classify, normalize, DEFAULT_CATEGORIES};
    use crate::models::RawRecord;
    use chrono::Utc;
    use uuid::Uuid;

    fn run_with(names: &[&str]) -> AnalysisRun {
        let planets: Vec<_> = names
            .iter()
            .map(|n| {
                normalize(
                    n,
                    &RawRecord {
                        insolation_flux: Some(1.0),
                        ..Default::default()
                    },
                )
            })
            .collect();
        let cards = classify(&planets, DEFAULT_CATEGORIES);
        let stats = batch_stats(&planets);
        AnalysisRun {
            run_id: Uuid::new_v4(),
            source_file: PathBuf::from("batch.csv"),
            completed_at: Utc::now(),
            planets,
            cards,
            stats,
            training: None,
        }
    }

    fn results_state(names: &[&str]) -> AnalysisState {
        AnalysisState::Results {
            run: run_with(names),
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(AnalysisState::default().phase(), Phase::Idle);
    }

    #[test]
    fn analyze_without_file_is_rejected() {
        let mut state = AnalysisState::Idle;
        assert_eq!(
            state.start_analysis().unwrap_err(),
            TransitionError::NoFileSelected
        );
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn select_then_start_then_complete() {
        let mut state = AnalysisState::Idle;
        state.select_file(PathBuf::from("batch.csv")).unwrap();
        assert_eq!(state.phase(), Phase::FileSelected);

        let path = state.start_analysis().unwrap();
        assert_eq!(path, PathBuf::from("batch.csv"));
        assert_eq!(state.phase(), Phase::Analyzing);

        state.complete(run_with(&["a", "b"])).unwrap();
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.visible_planets().len(), 2);
    }

    #[test]
    fn second_analyze_while_in_flight_is_rejected() {
        let mut state = AnalysisState::Idle;
        state.select_file(PathBuf::from("batch.csv")).unwrap();
        state.start_analysis().unwrap();
        assert_eq!(
            state.start_analysis().unwrap_err(),
            TransitionError::AnalysisInFlight
        );
        assert_eq!(state.phase(), Phase::Analyzing, "rejection must not mutate");
    }

    #[test]
    fn file_selection_during_analysis_is_rejected() {
        let mut state = AnalysisState::Idle;
        state.select_file(PathBuf::from("a.csv")).unwrap();
        state.start_analysis().unwrap();
        assert_eq!(
            state.select_file(PathBuf::from("b.csv")).unwrap_err(),
            TransitionError::AnalysisInFlight
        );
    }

    #[test]
    fn failed_reanalysis_retains_previous_results() {
        let mut state = results_state(&["a", "b"]);
        state.start_analysis().unwrap();
        state.fail("upload failed".into()).unwrap();

        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.error_message(), Some("upload failed"));
        // The previous run is still visible behind the error
        assert_eq!(state.visible_planets().len(), 2);

        state.acknowledge_failure();
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.visible_planets().len(), 2);
    }

    #[test]
    fn failed_first_analysis_returns_to_file_selected() {
        let mut state = AnalysisState::Idle;
        state.select_file(PathBuf::from("batch.csv")).unwrap();
        state.start_analysis().unwrap();
        state.fail("boom".into()).unwrap();

        state.acknowledge_failure();
        assert_eq!(state.phase(), Phase::FileSelected);
    }

    #[test]
    fn retry_after_failure_reuses_chosen_file() {
        let mut state = AnalysisState::Idle;
        state.select_file(PathBuf::from("batch.csv")).unwrap();
        state.start_analysis().unwrap();
        state.fail("boom".into()).unwrap();

        let path = state.start_analysis().unwrap();
        assert_eq!(path, PathBuf::from("batch.csv"));
    }

    #[test]
    fn new_file_discards_previous_results() {
        let mut state = results_state(&["a"]);
        state.select_file(PathBuf::from("next.csv")).unwrap();
        assert_eq!(state.phase(), Phase::FileSelected);
        assert!(state.current_run().is_none());
    }

    #[test]
    fn toggle_filters_and_toggling_again_restores_full_list() {
        let mut state = results_state(&["a", "b", "c"]);
        let full = state.visible_planets();

        state.toggle_category("Water Worlds").unwrap();
        assert_eq!(state.phase(), Phase::Filtered);
        assert_eq!(state.selected_category(), Some("Water Worlds"));
        // flux 1.0 > 0.5 on every test planet, so the card holds all three
        assert_eq!(state.visible_planets().len(), 3);

        state.toggle_category("Water Worlds").unwrap();
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.selected_category(), None);
        assert_eq!(state.visible_planets(), full);
    }

    #[test]
    fn selecting_other_category_replaces_filter() {
        let mut state = results_state(&["a"]);
        state.toggle_category("Water Worlds").unwrap();
        state.toggle_category("Gas Giants").unwrap();
        assert_eq!(state.selected_category(), Some("Gas Giants"));
        // flux-only planets are no gas giants
        assert!(state.visible_planets().is_empty());
    }

    #[test]
    fn toggle_without_results_is_rejected() {
        let mut state = AnalysisState::Idle;
        assert_eq!(
            state.toggle_category("Water Worlds").unwrap_err(),
            TransitionError::NoResults
        );
    }

    #[test]
    fn reanalysis_from_filtered_drops_filter_on_completion() {
        let mut state = results_state(&["a", "b"]);
        state.toggle_category("Water Worlds").unwrap();
        state.start_analysis().unwrap();
        state.complete(run_with(&["x"])).unwrap();
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.visible_planets().len(), 1);
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Phase::FileSelected).unwrap(),
            "\"file_selected\""
        );
        assert_eq!(Phase::Analyzing.as_str(), "analyzing");
    }
}
