pub mod config;
pub mod session;
pub mod trial;

pub use config::{AxisSpec, ColorMode, EntityConfig, ExperimentConfig, MapEntry, ValueMap};
pub use session::{SessionRecord, SubjectInfo};
pub use trial::{ColorSample, Response, Trial, TrialParams, TrialResult};
