use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{RawRecord, TrainingReport};

/// `GET /` — liveness probe.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// `POST /upload-file` and `POST /upload-row`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(default)]
    pub n_rows_added: u64,
}

/// `POST /retrain` — training outcome plus the scored record set.
///
/// `data` is a `BTreeMap` so one run iterates candidates in a
/// deterministic (name-sorted) order whatever the JSON key order was.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrainResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<TrainingReport>,
    #[serde(default)]
    pub data: BTreeMap<String, RawRecord>,
}

/// `POST /tune`.
#[derive(Debug, Clone, Deserialize)]
pub struct TuneResponse {
    pub status: String,
    pub best_params: BTreeMap<String, serde_json::Value>,
    pub best_score: f64,
}

/// Error body shape used by the service for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
