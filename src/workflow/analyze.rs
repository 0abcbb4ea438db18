use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::{BackendError, PredictionBackend};
use crate::classifier::{batch_stats, classify, normalize, DEFAULT_CATEGORIES};
use crate::models::{AnalysisRun, Planet};

/// Where in the chain an analyze run currently is. Emitted to the
/// frontend progress indicator as each stage begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    HealthCheck,
    Upload,
    Retrain,
    Classify,
    Complete,
}

impl WorkflowStage {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStage::HealthCheck => "health_check",
            WorkflowStage::Upload => "upload",
            WorkflowStage::Retrain => "retrain",
            WorkflowStage::Classify => "classify",
            WorkflowStage::Complete => "complete",
        }
    }
}

/// A failed analyze run, tagged with the stage that broke the chain.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Health check failed: {0}")]
    HealthCheck(#[source] BackendError),

    #[error("Upload failed: {0}")]
    Upload(#[source] BackendError),

    #[error("Analysis failed: {0}")]
    Retrain(#[source] BackendError),
}

/// The sequential analyze pipeline:
/// health-check → upload → retrain → classify.
///
/// Steps run strictly in order and the first failure aborts the chain;
/// per-step timeouts live in the backend client. Pure orchestration —
/// no IPC, no shared state, so it tests against the mock backend.
pub struct AnalysisWorkflow {
    backend: Box<dyn PredictionBackend + Send + Sync>,
}

impl AnalysisWorkflow {
    pub fn new(backend: Box<dyn PredictionBackend + Send + Sync>) -> Self {
        Self { backend }
    }

    pub fn run(&self, source: &Path) -> Result<AnalysisRun, WorkflowError> {
        self.run_with_progress(source, |_| {})
    }

    /// Run the chain, reporting each stage as it begins.
    pub fn run_with_progress(
        &self,
        source: &Path,
        mut on_stage: impl FnMut(WorkflowStage),
    ) -> Result<AnalysisRun, WorkflowError> {
        on_stage(WorkflowStage::HealthCheck);
        let health = self
            .backend
            .health_check()
            .map_err(WorkflowError::HealthCheck)?;
        tracing::debug!(message = %health.message, "Backend reachable");

        on_stage(WorkflowStage::Upload);
        let upload = self
            .backend
            .upload_file(source)
            .map_err(WorkflowError::Upload)?;
        tracing::info!(
            rows = upload.n_rows_added,
            file = %source.display(),
            "Dataset uploaded"
        );

        on_stage(WorkflowStage::Retrain);
        let retrain = self.backend.retrain(source).map_err(WorkflowError::Retrain)?;
        tracing::info!(
            candidates = retrain.data.len(),
            accuracy = retrain.result.as_ref().map(|r| r.accuracy),
            "Model retrained"
        );

        on_stage(WorkflowStage::Classify);
        let planets: Vec<Planet> = retrain
            .data
            .iter()
            .map(|(name, record)| normalize(name, record))
            .collect();
        let cards = classify(&planets, DEFAULT_CATEGORIES);
        let stats = batch_stats(&planets);

        on_stage(WorkflowStage::Complete);
        Ok(AnalysisRun {
            run_id: Uuid::new_v4(),
            source_file: source.to_path_buf(),
            completed_at: Utc::now(),
            planets,
            cards,
            stats,
            training: retrain.result,
        })
    }
}
