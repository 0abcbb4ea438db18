//! Single-detection IPC commands: assess one candidate from the form
//! input, optionally contributing the observation to the server dataset.

use serde::{Deserialize, Serialize};

use crate::backend::{HttpPredictionClient, PredictionBackend};
use crate::classifier::{normalize, DETECTION_THRESHOLD};
use crate::models::{Planet, RawRecord};

/// Verdict for the single-detection screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAssessment {
    pub planet: Planet,
    /// Probability cleared the detection threshold — confetti-worthy.
    pub is_candidate: bool,
}

/// Classify one hand-entered candidate locally.
///
/// Pure and instant: the same normalization and scoring the batch
/// pipeline applies, without any network round trip.
#[tauri::command]
pub fn assess_candidate(name: Option<String>, record: RawRecord) -> CandidateAssessment {
    let name = name.unwrap_or_else(|| "candidate".to_string());
    let planet = normalize(&name, &record);
    let is_candidate = planet.probability > DETECTION_THRESHOLD;
    tracing::info!(
        name = %planet.name,
        probability = planet.probability,
        score = planet.habitability_score,
        is_candidate,
        "Candidate assessed"
    );
    CandidateAssessment {
        planet,
        is_candidate,
    }
}

/// Append one observation to the server-side dataset.
#[tauri::command]
pub fn submit_observation(record: RawRecord) -> Result<u64, String> {
    let client = HttpPredictionClient::from_config();
    let response = client.upload_row(&record).map_err(|e| e.to_string())?;
    tracing::info!(rows = response.n_rows_added, "Observation submitted");
    Ok(response.n_rows_added)
}
