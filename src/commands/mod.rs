pub mod batch;
pub mod detection;
pub mod training;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::{HttpPredictionClient, PredictionBackend};
use crate::config;

/// Security: only hand regular, existing files to the upload chain.
pub(crate) fn validate_input_file(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()));
    }
    if !path.is_file() {
        return Err("Path is not a regular file".into());
    }
    Ok(())
}

/// Health check IPC command — verifies the desktop backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Granular backend status for the frontend indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    /// Status has not been checked yet
    Unknown,
    /// Prediction service answered the health probe
    Reachable,
    /// Prediction service not reachable or other fatal error
    Error,
}

/// Prediction-service availability for the frontend status indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendStatus {
    pub reachable: bool,
    pub base_url: String,
    /// Human-readable status summary.
    pub summary: String,
    pub level: StatusLevel,
}

/// Proactive check of the prediction service.
///
/// Called by the frontend on load so the user learns the service is down
/// before choosing a file, not after an upload times out.
#[tauri::command]
pub fn check_backend_status() -> BackendStatus {
    let base_url = config::backend_url();
    let client = HttpPredictionClient::from_config();

    match client.health_check() {
        Ok(health) => {
            tracing::debug!(message = %health.message, "Prediction service reachable");
            BackendStatus {
                reachable: true,
                base_url: base_url.clone(),
                summary: format!("Prediction service ready at {base_url}"),
                level: StatusLevel::Reachable,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prediction service unreachable");
            BackendStatus {
                reachable: false,
                base_url,
                summary: format!("Prediction service unavailable: {e}"),
                level: StatusLevel::Error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_returns_ok() {
        assert_eq!(health_check(), "ok");
    }

    #[test]
    fn validate_accepts_regular_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(validate_input_file(file.path()).is_ok());
    }

    #[test]
    fn validate_rejects_missing_path() {
        let err = validate_input_file(Path::new("/nonexistent/batch.csv")).unwrap_err();
        assert!(err.contains("File not found"));
    }

    #[test]
    fn validate_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_input_file(dir.path()).unwrap_err();
        assert!(err.contains("not a regular file"));
    }

    #[test]
    fn status_level_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&StatusLevel::Reachable).unwrap(),
            "\"reachable\""
        );
        assert_eq!(
            serde_json::to_string(&StatusLevel::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn backend_status_serializes_ipc_shape() {
        let status = BackendStatus {
            reachable: false,
            base_url: "http://localhost:8000".into(),
            summary: "Prediction service unavailable".into(),
            level: StatusLevel::Error,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"reachable\":false"));
        assert!(json.contains("\"level\":\"error\""));
    }
}
