//! The batch classification pipeline: raw backend records → normalized,
//! scored planets → overlapping category cards and summary views.
//!
//! Everything here is pure and synchronous; the workflow layer feeds it
//! the retrain response and owns all I/O.

pub mod categories;
pub mod characteristics;
pub mod normalize;
pub mod score;
pub mod spectral;
pub mod stats;

pub use categories::{classify, toggle_selection, CategoryDef, DEFAULT_CATEGORIES};
pub use characteristics::derive_characteristics;
pub use normalize::normalize;
pub use score::{derived_probability, habitability_score, resolve_probability};
pub use spectral::{classify_stellar_type, energy_budget};
pub use stats::{batch_stats, top_predictions, DETECTION_THRESHOLD};
