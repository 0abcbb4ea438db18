//! Client-constructed exports: the prediction CSV and the downloadable
//! model manifest. Both are built in memory; the frontend decides where
//! they land via the save dialog.

use chrono::Utc;
use serde::Serialize;

use crate::classifier::top_predictions;
use crate::config;
use crate::models::{ModelManifest, Planet, TrainingReport};

/// Column layout of the prediction CSV. The header is part of the
/// product contract with downstream notebooks — do not reorder.
pub const CSV_HEADER: &str =
    "Row,Probability,Orbital_Period,Transit_Duration,Planet_Radius,Stellar_Mass";

/// Default filename offered in the save dialog.
pub const CSV_FILENAME: &str = "exoplanet_predictions.csv";

/// Default filename for the model manifest download.
pub const MANIFEST_FILENAME: &str = "exoplanet_model.json";

/// Render the full batch as CSV, highest probability first, probability
/// to 4 decimal places and measurements to 2.
pub fn predictions_csv(planets: &[Planet]) -> String {
    let mut lines = Vec::with_capacity(planets.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for row in top_predictions(planets, planets.len()) {
        lines.push(format!(
            "{},{:.4},{:.2},{:.2},{:.2},{:.2}",
            row.row,
            row.probability,
            row.orbital_period,
            row.transit_duration,
            row.planet_radius,
            row.stellar_mass,
        ));
    }
    lines.join("\n")
}

/// A ready-to-save download: suggested filename plus contents.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPayload {
    pub filename: String,
    pub contents: String,
}

/// The prediction CSV as a save-dialog payload.
pub fn csv_export(planets: &[Planet]) -> ExportPayload {
    ExportPayload {
        filename: CSV_FILENAME.to_string(),
        contents: predictions_csv(planets),
    }
}

/// The model manifest as a save-dialog payload, pretty-printed.
pub fn manifest_export(report: &TrainingReport) -> Result<ExportPayload, serde_json::Error> {
    Ok(ExportPayload {
        filename: MANIFEST_FILENAME.to_string(),
        contents: serde_json::to_string_pretty(&model_manifest(report))?,
    })
}

/// Build the downloadable descriptor for the most recent training run.
pub fn model_manifest(report: &TrainingReport) -> ModelManifest {
    ModelManifest {
        model_type: "exoplanet_detector".to_string(),
        version: config::APP_VERSION.to_string(),
        trained_at: Utc::now(),
        architecture: "xgboost".to_string(),
        accuracy: report.accuracy,
        n_train: report.n_train,
        n_val: report.n_val,
    }
}
