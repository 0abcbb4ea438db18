//! Typed client for the external prediction/training service.
//!
//! The service is an opaque collaborator: upload, retrain, tune, and
//! download endpoints over HTTP. Everything network-shaped lives behind
//! the [`PredictionBackend`] trait so the workflow stays testable with
//! the mock implementation.

pub mod client;
pub mod types;

pub use client::{HttpPredictionClient, MockPredictionBackend, PredictionBackend};
pub use types::{HealthResponse, RetrainResponse, TuneResponse, UploadResponse};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Prediction service is not reachable at {0}")]
    Connection(String),

    #[error("{step} timed out after {seconds}s")]
    Timeout { step: &'static str, seconds: u64 },

    #[error("Prediction service returned error (status {status}): {detail}")]
    Http { status: u16, detail: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed response from prediction service: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_step_and_budget() {
        let err = BackendError::Timeout {
            step: "retrain",
            seconds: 300,
        };
        assert_eq!(err.to_string(), "retrain timed out after 300s");
    }

    #[test]
    fn http_error_carries_server_detail() {
        let err = BackendError::Http {
            status: 400,
            detail: "Dataset must contain a 'target' column.".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status 400"));
        assert!(msg.contains("target"));
    }
}
