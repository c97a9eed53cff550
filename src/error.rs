//! Error types for the wifi-radar crate.
//!
//! All failure at the scan boundary is represented as [`ScanError`]; the
//! polling loop downgrades every variant to a log line and an empty
//! observation list, so no scan failure ever aborts a cycle. Rendering
//! failures use [`RenderError`].

use thiserror::Error;

/// Errors that can occur while acquiring observations from a scan backend.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// The scan backend is missing entirely (no radio, no driver, no tool).
    #[error("scan backend unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of what is missing.
        reason: String,
    },

    /// The scan subprocess could not be spawned or exited abnormally.
    #[error("scan process failed: {0}")]
    Process(String),

    /// The scan subprocess ran but its output could not be parsed.
    #[error("failed to parse scan output: {0}")]
    Parse(String),

    /// A hardware address was not exactly 6 bytes.
    #[error("invalid hardware address: expected 6 bytes, got {len}")]
    InvalidMac {
        /// The number of bytes that were provided.
        len: usize,
    },

    /// A hardware address string did not match `AA:BB:CC:DD:EE:FF`.
    #[error("failed to parse hardware address from '{input}'")]
    MacParseFailed {
        /// The input string that could not be parsed.
        input: String,
    },
}

/// Errors that can occur while rendering a view.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// The drawing backend rejected an operation.
    #[error("drawing backend error: {0}")]
    Backend(String),

    /// A history chart was requested for a network with no recorded samples.
    #[error("no signal history recorded for '{name}'")]
    NoHistory {
        /// The network name the chart was requested for.
        name: String,
    },
}
