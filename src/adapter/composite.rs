//! Aggregation of several scan sources with per-source failure tolerance.

use tracing::warn;

use crate::domain::bssid::NetworkObservation;
use crate::error::ScanError;
use crate::port::scan_source::ScanSource;

/// Scans every wrapped source in order and concatenates the results.
///
/// A source that fails is logged and skipped; the remaining sources still
/// contribute, so one bad adapter never aborts a cycle. When every source
/// fails the scan degrades to an empty result, which callers treat as "no
/// networks currently visible".
pub struct CompositeScanner {
    sources: Vec<Box<dyn ScanSource>>,
}

impl CompositeScanner {
    /// Create a composite over the given sources, scanned in order.
    pub fn new(sources: Vec<Box<dyn ScanSource>>) -> Self {
        Self { sources }
    }

    /// The number of wrapped sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sources are configured.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl ScanSource for CompositeScanner {
    fn scan(&mut self) -> Result<Vec<NetworkObservation>, ScanError> {
        let mut all = Vec::new();

        for source in &mut self.sources {
            match source.scan() {
                Ok(observations) => all.extend(observations),
                Err(error) => {
                    warn!(source = source.name(), %error, "scan source failed, skipping");
                }
            }
        }

        Ok(all)
    }

    fn name(&self) -> &'static str {
        "composite"
    }
}
