//! Exponential coordinate smoothing.

use crate::domain::network::NetworkRecord;
use crate::domain::registry::NetworkRegistry;

/// Default weight given to the freshly assigned coordinate.
pub const DEFAULT_ALPHA: f64 = 0.2;

/// Damps frame-to-frame jitter by blending each record's fresh coordinate
/// with the coordinate displayed on the previous cycle.
///
/// Runs after assignment and before manual correction. The output of every
/// cycle becomes the blend anchor for the next one; names not seen this
/// cycle keep their last displayed value untouched.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateSmoother {
    alpha: f64,
}

impl CoordinateSmoother {
    /// Create a smoother with the given new-data weight in `(0, 1]`.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// The configured new-data weight.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smooth every positioned record and update the displayed-coordinate
    /// state. Records without a position are skipped entirely.
    pub fn smooth(&self, registry: &mut NetworkRegistry, records: &mut [NetworkRecord]) {
        for record in records {
            let Some(fresh) = record.position else {
                continue;
            };

            let output = match registry.displayed(&record.name) {
                Some(previous) => fresh.blend(previous, self.alpha),
                None => fresh,
            };

            record.position = Some(output);
            registry.set_displayed(&record.name, output);
        }
    }
}

impl Default for CoordinateSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}
