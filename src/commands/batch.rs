//! Batch-analysis IPC commands.
//!
//! The analyze command drives the full chain (health-check → upload →
//! retrain → classify) and owns the state-machine bookkeeping around it;
//! everything else is a view over the current state.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, State};

use crate::backend::HttpPredictionClient;
use crate::core_state::CoreState;
use crate::export;
use crate::models::{AnalysisRun, BatchStats, CategoryCard, Planet, PredictionRow};
use crate::workflow::{AnalysisState, AnalysisWorkflow, Phase, WorkflowStage};

/// Everything the batch screen renders, derived from the state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisView {
    pub phase: Phase,
    pub source_file: Option<String>,
    /// Filtered when a category is selected, the full run otherwise.
    pub planets: Vec<Planet>,
    pub cards: Vec<CategoryCard>,
    pub stats: Option<BatchStats>,
    pub selected_category: Option<String>,
    pub error: Option<String>,
}

/// Emitted on `analysis-progress` as each workflow stage begins.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisProgressEvent {
    pub stage: WorkflowStage,
}

fn view(state: &AnalysisState) -> AnalysisView {
    let run = state.current_run();
    AnalysisView {
        phase: state.phase(),
        source_file: state.source_file().map(|p| p.display().to_string()),
        planets: state.visible_planets(),
        cards: run.map(|r| r.cards.clone()).unwrap_or_default(),
        stats: run.map(|r| r.stats),
        selected_category: state.selected_category().map(String::from),
        error: state.error_message().map(String::from),
    }
}

/// Transition into `Analyzing`, run the workflow, and record the outcome.
///
/// Split from the command so the whole dance is testable against the
/// mock backend. A failed run moves the machine to `Failed` but keeps
/// the previous result set restorable.
pub fn run_analysis(
    state: &CoreState,
    workflow: &AnalysisWorkflow,
    mut on_stage: impl FnMut(WorkflowStage),
) -> Result<AnalysisRun, String> {
    let path = {
        let mut guard = state.write_analysis().map_err(|e| e.to_string())?;
        guard.start_analysis().map_err(|e| e.to_string())?
    };

    tracing::info!(file = %path.display(), "Starting batch analysis");

    match workflow.run_with_progress(&path, &mut on_stage) {
        Ok(run) => {
            if let Some(report) = run.training.clone() {
                state.set_last_training(report);
            }
            let mut guard = state.write_analysis().map_err(|e| e.to_string())?;
            guard.complete(run.clone()).map_err(|e| e.to_string())?;
            tracing::info!(
                run_id = %run.run_id,
                total = run.stats.total,
                detected = run.stats.detected,
                "Batch analysis complete"
            );
            Ok(run)
        }
        Err(e) => {
            let message = e.to_string();
            tracing::warn!(error = %message, file = %path.display(), "Batch analysis failed");
            if let Ok(mut guard) = state.write_analysis() {
                let _ = guard.fail(message.clone());
            }
            Err(message)
        }
    }
}

/// Choose the CSV to analyze. Discards any previous result set.
#[tauri::command]
pub fn select_batch_file(
    state: State<'_, Arc<CoreState>>,
    file_path: String,
) -> Result<AnalysisView, String> {
    let path = Path::new(&file_path);
    super::validate_input_file(path)?;

    let mut guard = state.write_analysis().map_err(|e| e.to_string())?;
    guard
        .select_file(path.to_path_buf())
        .map_err(|e| e.to_string())?;
    tracing::info!(file = %file_path, "Batch file selected");
    Ok(view(&guard))
}

/// Run the analyze chain on the selected file.
///
/// Rejected while a run is in flight; a failure leaves the previous
/// result set in place. Emits `analysis-progress` per stage. The chain
/// blocks on the network, so it runs on the blocking pool.
#[tauri::command]
pub async fn analyze_batch(
    state: State<'_, Arc<CoreState>>,
    app: AppHandle,
) -> Result<AnalysisRun, String> {
    let state = state.inner().clone();
    tokio::task::spawn_blocking(move || {
        let workflow = AnalysisWorkflow::new(Box::new(HttpPredictionClient::from_config()));
        run_analysis(&state, &workflow, move |stage| {
            let _ = app.emit("analysis-progress", AnalysisProgressEvent { stage });
        })
    })
    .await
    .map_err(|e| format!("Analysis task failed: {e}"))?
}

/// Current state snapshot for the batch screen.
#[tauri::command]
pub fn get_analysis_view(state: State<'_, Arc<CoreState>>) -> Result<AnalysisView, String> {
    let guard = state.read_analysis().map_err(|e| e.to_string())?;
    Ok(view(&guard))
}

/// Toggle the category filter — same name clears it, another replaces it.
#[tauri::command]
pub fn select_category(
    state: State<'_, Arc<CoreState>>,
    name: String,
) -> Result<AnalysisView, String> {
    let mut guard = state.write_analysis().map_err(|e| e.to_string())?;
    guard.toggle_category(&name).map_err(|e| e.to_string())?;
    tracing::debug!(category = %name, "Category toggled");
    Ok(view(&guard))
}

/// Leave the error banner, restoring the pre-call state.
#[tauri::command]
pub fn acknowledge_analysis_failure(
    state: State<'_, Arc<CoreState>>,
) -> Result<AnalysisView, String> {
    let mut guard = state.write_analysis().map_err(|e| e.to_string())?;
    guard.acknowledge_failure();
    Ok(view(&guard))
}

/// The prediction table, sorted by probability descending.
#[tauri::command]
pub fn get_top_predictions(
    state: State<'_, Arc<CoreState>>,
    limit: usize,
) -> Result<Vec<PredictionRow>, String> {
    let guard = state.read_analysis().map_err(|e| e.to_string())?;
    let run = guard
        .current_run()
        .ok_or("No results yet — run an analysis first")?;
    Ok(crate::classifier::top_predictions(&run.planets, limit))
}

/// The categorized result set as a CSV payload for the save dialog.
#[tauri::command]
pub fn export_results_csv(
    state: State<'_, Arc<CoreState>>,
) -> Result<export::ExportPayload, String> {
    let guard = state.read_analysis().map_err(|e| e.to_string())?;
    let run = guard
        .current_run()
        .ok_or("No results to export — run an analysis first")?;
    tracing::info!(rows = run.planets.len(), "Exporting prediction CSV");
    Ok(export::csv_export(&run.planets))
}

/// The server-side dataset as CSV text.
#[tauri::command]
pub fn fetch_dataset_csv() -> Result<String, String> {
    use crate::backend::PredictionBackend;
    let client = HttpPredictionClient::from_config();
    client.download_dataset().map_err(|e| e.to_string())
}
