pub mod category;
pub mod planet;
pub mod record;
pub mod run;
pub mod stats;
pub mod training;

pub use category::CategoryCard;
pub use planet::{Planet, PlanetCharacteristics, PlanetMeasurements, StellarType};
pub use record::RawRecord;
pub use run::AnalysisRun;
pub use stats::{BatchStats, PredictionRow};
pub use training::{ModelManifest, TrainingReport, TuneOutcome, TuneRequest};
