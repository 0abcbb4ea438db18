//! Model-training IPC commands: retrain on an uploaded CSV, tune
//! hyperparameters, and export the model manifest.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

use crate::backend::{BackendError, HttpPredictionClient, PredictionBackend};
use crate::core_state::CoreState;
use crate::export;
use crate::models::{TrainingReport, TuneOutcome, TuneRequest};
use crate::workflow::WorkflowStage;

/// Emitted on `training-progress` as each step begins.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingProgressEvent {
    pub stage: WorkflowStage,
}

/// Health-check then retrain; remembers the report for the manifest.
///
/// Split from the command so it tests against the mock backend.
pub fn run_training(
    state: &CoreState,
    backend: &dyn PredictionBackend,
    path: &Path,
    mut on_stage: impl FnMut(WorkflowStage),
) -> Result<TrainingReport, String> {
    on_stage(WorkflowStage::HealthCheck);
    backend.health_check().map_err(|e| e.to_string())?;

    on_stage(WorkflowStage::Retrain);
    let response = backend.retrain(path).map_err(|e| e.to_string())?;
    let report = response.result.ok_or_else(|| {
        BackendError::MalformedResponse("retrain response carried no training report".into())
            .to_string()
    })?;

    on_stage(WorkflowStage::Complete);
    tracing::info!(
        accuracy = report.accuracy,
        n_train = report.n_train,
        n_val = report.n_val,
        "Model trained"
    );
    state.set_last_training(report.clone());
    Ok(report)
}

/// Train a custom model on a labeled CSV. Blocks on the retrain call,
/// so it runs on the blocking pool.
#[tauri::command]
pub async fn train_model(
    state: State<'_, Arc<CoreState>>,
    app: AppHandle,
    file_path: String,
) -> Result<TrainingReport, String> {
    super::validate_input_file(Path::new(&file_path))?;

    let state = state.inner().clone();
    tokio::task::spawn_blocking(move || {
        let client = HttpPredictionClient::from_config();
        run_training(&state, &client, Path::new(&file_path), move |stage| {
            let _ = app.emit("training-progress", TrainingProgressEvent { stage });
        })
    })
    .await
    .map_err(|e| format!("Training task failed: {e}"))?
}

/// Grid-search hyperparameters over the server-side dataset. The search
/// can run for minutes, so it lives on the blocking pool too.
#[tauri::command]
pub async fn tune_hyperparameters(request: Option<TuneRequest>) -> Result<TuneOutcome, String> {
    let request = request.unwrap_or_default();
    tracing::info!(method = %request.method, cv = request.cv, "Starting hyperparameter search");

    tokio::task::spawn_blocking(move || {
        let client = HttpPredictionClient::from_config();
        let response = client.tune(&request).map_err(|e| e.to_string())?;
        tracing::info!(best_score = response.best_score, "Hyperparameter search finished");
        Ok(TuneOutcome {
            best_params: response.best_params,
            best_score: response.best_score,
        })
    })
    .await
    .map_err(|e| format!("Tuning task failed: {e}"))?
}

/// The downloadable descriptor of the most recent training run, as a
/// pretty-printed JSON payload for the save dialog.
#[tauri::command]
pub fn export_model_manifest(
    state: State<'_, Arc<CoreState>>,
) -> Result<export::ExportPayload, String> {
    let report = state
        .last_training()
        .map_err(|e| e.to_string())?
        .ok_or("No trained model yet — train a model first")?;
    export::manifest_export(&report).map_err(|e| e.to_string())
}
