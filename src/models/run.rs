use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryCard;
use super::planet::Planet;
use super::stats::BatchStats;
use super::training::TrainingReport;

/// The complete output of one successful analyze action.
///
/// Regenerated wholesale per run — there is no incremental update. The
/// planet order is the classification order (name-sorted, see DESIGN.md)
/// and every card's membership preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub run_id: Uuid,
    /// The file this run was produced from; re-analysis reuses it.
    pub source_file: PathBuf,
    pub completed_at: DateTime<Utc>,
    pub planets: Vec<Planet>,
    pub cards: Vec<CategoryCard>,
    pub stats: BatchStats,
    /// Present when the backend reported a training outcome with the data.
    #[serde(default)]
    pub training: Option<TrainingReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_serializes() {
        let run = AnalysisRun {
            run_id: Uuid::new_v4(),
            source_file: PathBuf::from("batch.csv"),
            completed_at: Utc::now(),
            planets: vec![],
            cards: vec![],
            stats: BatchStats {
                total: 0,
                detected: 0,
                confidence: 0.0,
            },
            training: None,
        };
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"planets\":[]"));
        assert!(json.contains("\"training\":null"));
    }
}
