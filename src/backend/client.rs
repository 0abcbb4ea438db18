use std::path::Path;
use std::time::Duration;

use crate::config;
use crate::models::{RawRecord, TuneRequest};

use super::types::{ErrorDetail, HealthResponse, RetrainResponse, TuneResponse, UploadResponse};
use super::BackendError;

/// Seam between the workflow and the prediction/training service.
pub trait PredictionBackend {
    /// `GET /` — fail fast before any upload is attempted.
    fn health_check(&self) -> Result<HealthResponse, BackendError>;

    /// `POST /upload-file` — append a CSV to the server-side dataset.
    fn upload_file(&self, path: &Path) -> Result<UploadResponse, BackendError>;

    /// `POST /upload-row` — append a single observation.
    fn upload_row(&self, record: &RawRecord) -> Result<UploadResponse, BackendError>;

    /// `POST /retrain` — train on the uploaded CSV, returning the scored
    /// record set.
    fn retrain(&self, path: &Path) -> Result<RetrainResponse, BackendError>;

    /// `POST /tune` — hyperparameter search over the stored dataset.
    fn tune(&self, request: &TuneRequest) -> Result<TuneResponse, BackendError>;

    /// `GET /download` — the stored dataset as CSV text.
    fn download_dataset(&self) -> Result<String, BackendError>;
}

/// Production client over blocking reqwest with per-step timeouts.
pub struct HttpPredictionClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpPredictionClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Client for the configured service URL (`EXOSCAN_BACKEND_URL`
    /// override, localhost default).
    pub fn from_config() -> Self {
        Self::new(&config::backend_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a transport failure to the step-aware error kinds.
    fn transport_error(
        &self,
        step: &'static str,
        timeout: Duration,
        err: reqwest::Error,
    ) -> BackendError {
        if err.is_connect() {
            BackendError::Connection(self.base_url.clone())
        } else if err.is_timeout() {
            BackendError::Timeout {
                step,
                seconds: timeout.as_secs(),
            }
        } else {
            BackendError::HttpClient(err.to_string())
        }
    }

    /// Turn a non-2xx response into an error carrying the server's
    /// `detail` message when the body has one.
    fn status_error(response: reqwest::blocking::Response) -> BackendError {
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        let detail = serde_json::from_str::<ErrorDetail>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        BackendError::Http { status, detail }
    }

    fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, BackendError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response));
        }
        response
            .json::<T>()
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    fn post_csv<T: serde::de::DeserializeOwned>(
        &self,
        step: &'static str,
        path: &str,
        file: &Path,
        timeout: Duration,
    ) -> Result<T, BackendError> {
        let form = reqwest::blocking::multipart::Form::new().file("file", file)?;
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .timeout(timeout)
            .send()
            .map_err(|e| self.transport_error(step, timeout, e))?;
        Self::parse(response)
    }
}

impl PredictionBackend for HttpPredictionClient {
    fn health_check(&self) -> Result<HealthResponse, BackendError> {
        let timeout = config::HEALTH_TIMEOUT;
        let response = self
            .client
            .get(self.url("/"))
            .timeout(timeout)
            .send()
            .map_err(|e| self.transport_error("health check", timeout, e))?;
        Self::parse(response)
    }

    fn upload_file(&self, path: &Path) -> Result<UploadResponse, BackendError> {
        self.post_csv("upload", "/upload-file", path, config::UPLOAD_TIMEOUT)
    }

    fn upload_row(&self, record: &RawRecord) -> Result<UploadResponse, BackendError> {
        let timeout = config::UPLOAD_TIMEOUT;
        let response = self
            .client
            .post(self.url("/upload-row"))
            .json(&serde_json::json!({ "row": record }))
            .timeout(timeout)
            .send()
            .map_err(|e| self.transport_error("upload row", timeout, e))?;
        Self::parse(response)
    }

    fn retrain(&self, path: &Path) -> Result<RetrainResponse, BackendError> {
        self.post_csv("retrain", "/retrain", path, config::RETRAIN_TIMEOUT)
    }

    fn tune(&self, request: &TuneRequest) -> Result<TuneResponse, BackendError> {
        let timeout = config::TUNE_TIMEOUT;
        let response = self
            .client
            .post(self.url("/tune"))
            .json(request)
            .timeout(timeout)
            .send()
            .map_err(|e| self.transport_error("tune", timeout, e))?;
        Self::parse(response)
    }

    fn download_dataset(&self) -> Result<String, BackendError> {
        let timeout = config::DOWNLOAD_TIMEOUT;
        let response = self
            .client
            .get(self.url("/download"))
            .timeout(timeout)
            .send()
            .map_err(|e| self.transport_error("download", timeout, e))?;
        if !response.status().is_success() {
            return Err(Self::status_error(response));
        }
        response
            .text()
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }
}

/// Mock backend for tests — canned responses with per-step failure
/// injection.
#[derive(Default)]
pub struct MockPredictionBackend {
    pub healthy: bool,
    pub upload_response: Option<UploadResponse>,
    pub retrain_body: Option<String>,
    pub tune_body: Option<String>,
    pub dataset_csv: Option<String>,
}

impl MockPredictionBackend {
    /// A backend where every step succeeds with the given retrain body.
    pub fn healthy_with_data(retrain_body: &str) -> Self {
        Self {
            healthy: true,
            upload_response: Some(UploadResponse {
                status: "ok".into(),
                n_rows_added: 1,
            }),
            retrain_body: Some(retrain_body.to_string()),
            tune_body: None,
            dataset_csv: None,
        }
    }

    fn unavailable() -> BackendError {
        BackendError::Connection("http://localhost:8000".into())
    }
}

impl PredictionBackend for MockPredictionBackend {
    fn health_check(&self) -> Result<HealthResponse, BackendError> {
        if self.healthy {
            Ok(HealthResponse {
                message: "ok".into(),
            })
        } else {
            Err(Self::unavailable())
        }
    }

    fn upload_file(&self, _path: &Path) -> Result<UploadResponse, BackendError> {
        self.upload_response.clone().ok_or_else(|| BackendError::Http {
            status: 400,
            detail: "Failed to read CSV".into(),
        })
    }

    fn upload_row(&self, _record: &RawRecord) -> Result<UploadResponse, BackendError> {
        self.upload_response.clone().ok_or_else(Self::unavailable)
    }

    fn retrain(&self, _path: &Path) -> Result<RetrainResponse, BackendError> {
        let body = self.retrain_body.as_ref().ok_or_else(|| BackendError::Http {
            status: 500,
            detail: "Retraining failed: not enough data".into(),
        })?;
        serde_json::from_str(body).map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    fn tune(&self, _request: &TuneRequest) -> Result<TuneResponse, BackendError> {
        let body = self.tune_body.as_ref().ok_or_else(Self::unavailable)?;
        serde_json::from_str(body).map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    fn download_dataset(&self) -> Result<String, BackendError> {
        self.dataset_csv.clone().ok_or_else(Self::unavailable)
    }
}
