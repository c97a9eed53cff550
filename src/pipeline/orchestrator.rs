//! The poll-cycle pipeline.
//!
//! `RadarPipeline` connects the per-cycle stages into a single `process()`
//! call that turns one scan's observations into the displayed record
//! collection:
//!
//! 1. Decode names and estimate distances (pure, per observation).
//! 2. Coordinate assignment (anchor recall or first-sighting draw).
//! 3. Exponential smoothing against the previous displayed coordinate.
//! 4. Manual correction for known-bad geometry (first match wins).
//! 5. Signal history append and re-attachment by name.
//!
//! The pipeline owns the stage objects; the caller owns the
//! [`NetworkRegistry`] and passes it in mutably each cycle.

use std::collections::HashSet;

use tracing::debug;

use crate::config::RadarConfig;
use crate::domain::bssid::NetworkObservation;
use crate::domain::network::NetworkRecord;
use crate::domain::registry::NetworkRegistry;
use crate::domain::ssid::SsidEncoding;
use crate::pipeline::assigner::CoordinateAssigner;
use crate::pipeline::distance::estimate_distance;
use crate::pipeline::overrides::OverrideTable;
use crate::pipeline::smoother::CoordinateSmoother;

/// The complete per-cycle processing pipeline.
pub struct RadarPipeline {
    encoding: SsidEncoding,
    assigner: CoordinateAssigner,
    smoother: CoordinateSmoother,
    overrides: OverrideTable,
    cycle: u64,
}

impl RadarPipeline {
    /// Create a pipeline with the default override table.
    #[must_use]
    pub fn new(config: &RadarConfig) -> Self {
        Self::with_overrides(config, OverrideTable::default())
    }

    /// Create a pipeline with an injected override table.
    #[must_use]
    pub fn with_overrides(config: &RadarConfig, overrides: OverrideTable) -> Self {
        Self {
            encoding: config.encoding,
            assigner: CoordinateAssigner::new(),
            smoother: CoordinateSmoother::new(config.smoothing_alpha),
            overrides,
            cycle: 0,
        }
    }

    /// Process one scan's observations into displayed records.
    ///
    /// Records are rebuilt from scratch; everything that persists between
    /// cycles lives in `registry`. When one name appears under several
    /// hardware addresses, each keeps its own row but they share one tracked
    /// entity, and the history receives one sample per name per cycle.
    pub fn process(
        &mut self,
        observations: &[NetworkObservation],
        registry: &mut NetworkRegistry,
    ) -> Vec<NetworkRecord> {
        self.cycle += 1;

        let mut records: Vec<NetworkRecord> = observations
            .iter()
            .map(|obs| NetworkRecord {
                name: obs.ssid.decode(self.encoding),
                bssid: obs.bssid,
                rssi_dbm: obs.rssi_dbm,
                distance_m: estimate_distance(obs.rssi_dbm),
                position: None,
                history: std::collections::VecDeque::new(),
            })
            .collect();

        self.assigner.assign(registry, &mut records);
        self.smoother.smooth(registry, &mut records);
        self.overrides.apply(&mut records);

        let mut appended: HashSet<String> = HashSet::new();
        for record in &mut records {
            if appended.insert(record.name.clone()) {
                registry.push_history(&record.name, record.rssi_dbm);
            }
            record.history = registry.history(&record.name).cloned().unwrap_or_default();
        }

        debug!(
            cycle = self.cycle,
            visible = records.len(),
            tracked = registry.tracked_len(),
            "poll cycle complete"
        );

        records
    }

    /// Number of cycles processed so far.
    #[must_use]
    pub fn cycle_count(&self) -> u64 {
        self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bssid::BssidId;
    use crate::domain::ssid::Ssid;
    use std::time::Instant;

    fn make_obs(name: &str, mac: [u8; 6], rssi_dbm: i32) -> NetworkObservation {
        NetworkObservation {
            ssid: Ssid::from(name),
            bssid: BssidId(mac),
            rssi_dbm,
            timestamp: Instant::now(),
        }
    }

    #[test]
    fn one_cycle_builds_complete_records() {
        let config = RadarConfig::default();
        let mut pipeline = RadarPipeline::new(&config);
        let mut registry = NetworkRegistry::new();

        let obs = vec![
            make_obs("HomeNetwork", [0x01; 6], -40),
            make_obs("GuestWifi", [0x02; 6], -70),
        ];
        let records = pipeline.process(&obs, &mut registry);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "HomeNetwork");
        assert!((records[0].distance_m - 1.0).abs() < 1e-9);
        assert!(records[0].position.is_some());
        assert_eq!(records[0].history.len(), 1);
        assert_eq!(records[0].history.front(), Some(&-40));
        assert_eq!(pipeline.cycle_count(), 1);
    }

    #[test]
    fn anchor_survives_intermittent_visibility() {
        let config = RadarConfig::default();
        let mut pipeline = RadarPipeline::new(&config);
        let mut registry = NetworkRegistry::new();

        let first = pipeline.process(&[make_obs("A", [0x01; 6], -50)], &mut registry);
        let anchor = registry.anchor("A").unwrap();
        assert_eq!(first[0].position, Some(anchor));

        // Two cycles with the network absent.
        pipeline.process(&[], &mut registry);
        pipeline.process(&[], &mut registry);

        // Reappears: identical anchor before smoothing, and since the
        // displayed coordinate already converged to the anchor, the
        // displayed output equals it too.
        pipeline.process(&[make_obs("A", [0x01; 6], -50)], &mut registry);
        assert_eq!(registry.anchor("A"), Some(anchor));
    }

    #[test]
    fn override_pins_every_cycle() {
        let config = RadarConfig::default();
        let mut pipeline = RadarPipeline::new(&config);
        let mut registry = NetworkRegistry::new();

        for _ in 0..5 {
            let records =
                pipeline.process(&[make_obs("OIS Airplane Crew", [0x03; 6], -65)], &mut registry);
            let pos = records[0].position.unwrap();
            assert!((pos.x - 0.43).abs() < 1e-12);
            assert!((pos.y - (-0.63)).abs() < 1e-12);
        }
    }

    #[test]
    fn duplicate_names_share_history_one_sample_per_cycle() {
        let config = RadarConfig::default();
        let mut pipeline = RadarPipeline::new(&config);
        let mut registry = NetworkRegistry::new();

        let obs = vec![
            make_obs("Mesh", [0x01; 6], -50),
            make_obs("Mesh", [0x02; 6], -72),
        ];
        pipeline.process(&obs, &mut registry);

        assert_eq!(registry.history("Mesh").unwrap().len(), 1);
    }

    #[test]
    fn undecodable_name_still_tracked_via_fallback() {
        let config = RadarConfig::default();
        let mut pipeline = RadarPipeline::new(&config);
        let mut registry = NetworkRegistry::new();

        let obs = NetworkObservation {
            ssid: Ssid::from_bytes(vec![0xFF, 0x00]),
            bssid: BssidId([0x09; 6]),
            rssi_dbm: -60,
            timestamp: Instant::now(),
        };
        let records = pipeline.process(&[obs], &mut registry);

        assert_eq!(records[0].name, "[RAW] FF00");
        assert!(registry.anchor("[RAW] FF00").is_some());
    }

    #[test]
    fn empty_scan_is_a_normal_cycle() {
        let config = RadarConfig::default();
        let mut pipeline = RadarPipeline::new(&config);
        let mut registry = NetworkRegistry::new();

        let records = pipeline.process(&[], &mut registry);
        assert!(records.is_empty());
        assert_eq!(pipeline.cycle_count(), 1);
    }
}
