use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Training outcome reported by the backend after `/retrain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Validation accuracy in [0, 1].
    pub accuracy: f64,
    pub n_train: usize,
    pub n_val: usize,
    /// Server-side path of the persisted model, informational only.
    #[serde(default)]
    pub model_path: Option<String>,
}

/// Hyperparameter search request for `/tune`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuneRequest {
    pub method: String,
    pub cv: u32,
    pub max_evals: u32,
}

impl Default for TuneRequest {
    fn default() -> Self {
        Self {
            method: "grid".to_string(),
            cv: 3,
            max_evals: 20,
        }
    }
}

/// Best hyperparameters found by `/tune`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuneOutcome {
    /// Parameter name → chosen value, as reported by the search.
    pub best_params: BTreeMap<String, serde_json::Value>,
    pub best_score: f64,
}

/// The downloadable model descriptor offered after a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub model_type: String,
    pub version: String,
    pub trained_at: DateTime<Utc>,
    pub architecture: String,
    pub accuracy: f64,
    pub n_train: usize,
    pub n_val: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_report_parses_backend_shape() {
        let report: TrainingReport = serde_json::from_str(
            r#"{"accuracy": 0.942, "n_train": 800, "n_val": 200, "model_path": "data/model.joblib"}"#,
        )
        .unwrap();
        assert_eq!(report.accuracy, 0.942);
        assert_eq!(report.n_train, 800);
        assert_eq!(report.model_path.as_deref(), Some("data/model.joblib"));
    }

    #[test]
    fn training_report_tolerates_missing_model_path() {
        let report: TrainingReport =
            serde_json::from_str(r#"{"accuracy": 0.9, "n_train": 10, "n_val": 3}"#).unwrap();
        assert_eq!(report.model_path, None);
    }

    #[test]
    fn tune_request_defaults_match_backend_defaults() {
        let req = TuneRequest::default();
        assert_eq!(req.method, "grid");
        assert_eq!(req.cv, 3);
        assert_eq!(req.max_evals, 20);
    }

    #[test]
    fn tune_outcome_parses_nested_params() {
        let outcome: TuneOutcome = serde_json::from_str(
            r#"{"best_params": {"max_depth": 6, "learning_rate": 0.1}, "best_score": 0.93}"#,
        )
        .unwrap();
        assert_eq!(outcome.best_params.len(), 2);
        assert_eq!(outcome.best_params["max_depth"], serde_json::json!(6));
    }
}
