//! Runtime configuration.

use std::time::Duration;

use crate::domain::ssid::SsidEncoding;
use crate::pipeline::smoother::DEFAULT_ALPHA;

/// Configuration for the polling pipeline and the two display modes.
#[derive(Debug, Clone)]
pub struct RadarConfig {
    /// Period of the poll-compute-store cycle.
    ///
    /// Must stay comfortably above the worst-case blocking scan latency:
    /// there is no reentrancy guard, the cycle simply assumes the previous
    /// scan has returned before the next tick fires.
    pub poll_interval: Duration,
    /// Period of the sweep-line animation tick (radar view only).
    pub sweep_interval: Duration,
    /// Sweep-line advance per animation tick, in radians.
    pub sweep_step: f64,
    /// Weight given to fresh coordinates in exponential smoothing.
    pub smoothing_alpha: f64,
    /// Strategy for decoding broadcast names.
    pub encoding: SsidEncoding,
    /// Full-scale radar radius in meters; networks farther than this plot on
    /// the outer ring.
    pub range_m: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            sweep_interval: Duration::from_millis(50),
            sweep_step: 0.1,
            smoothing_alpha: DEFAULT_ALPHA,
            encoding: SsidEncoding::default(),
            range_m: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_display_cadence() {
        let config = RadarConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.sweep_interval, Duration::from_millis(50));
        assert!((config.smoothing_alpha - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.encoding, SsidEncoding::Utf8);
    }
}
