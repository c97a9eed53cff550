//! The signal-to-position estimation and smoothing pipeline.

pub mod assigner;
pub mod distance;
pub mod orchestrator;
pub mod overrides;
pub mod smoother;

pub use assigner::CoordinateAssigner;
pub use distance::{estimate_distance, DISTANCE_INVALID, PATH_LOSS_EXPONENT, RSSI_REF_DBM};
pub use orchestrator::RadarPipeline;
pub use overrides::{NamePattern, OverrideRule, OverrideTable};
pub use smoother::{CoordinateSmoother, DEFAULT_ALPHA};
