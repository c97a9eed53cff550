//! Rendering boundary: consumers of the computed record collection.
//!
//! The pipeline never calls into this module; the scheduler hands each view
//! the latest snapshot and the view draws whatever it was last given.

pub mod chart;
pub mod list;
pub mod radar;

pub use chart::{render_history_chart, CHART_SIZE};
pub use list::{render_json, render_table};
pub use radar::{RadarRenderer, RADAR_SIZE};
