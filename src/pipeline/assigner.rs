//! Anchor coordinate assignment.

use rand::Rng;

use crate::domain::network::{NetworkRecord, Position};
use crate::domain::registry::NetworkRegistry;

/// Assigns each record its plotted coordinate.
///
/// A name seen before recalls its anchor verbatim; a first sighting draws a
/// uniformly random bearing in `[0, 2pi)` at a radius equal to the estimated
/// distance and stores the result as the permanent anchor for that name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateAssigner;

impl CoordinateAssigner {
    /// Create an assigner.
    pub fn new() -> Self {
        Self
    }

    /// Decide the coordinate for every record in the current cycle.
    ///
    /// A record whose name has no anchor yet and whose distance is the
    /// invalid sentinel is left without a position: a physically invalid
    /// first reading must not pin a garbage anchor for the rest of the
    /// process lifetime. The name is retried on its next valid reading.
    pub fn assign(&mut self, registry: &mut NetworkRegistry, records: &mut [NetworkRecord]) {
        let mut rng = rand::rng();

        for record in records {
            if let Some(anchor) = registry.anchor(&record.name) {
                record.position = Some(anchor);
                continue;
            }

            if !record.has_valid_distance() {
                continue;
            }

            let bearing = rng.random_range(0.0..std::f64::consts::TAU);
            let anchor = Position::from_polar(record.distance_m, bearing);
            registry.set_anchor(&record.name, anchor);
            record.position = Some(anchor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bssid::BssidId;
    use std::collections::VecDeque;

    fn make_record(name: &str, rssi_dbm: i32, distance_m: f64) -> NetworkRecord {
        NetworkRecord {
            name: name.to_owned(),
            bssid: BssidId([0x02; 6]),
            rssi_dbm,
            distance_m,
            position: None,
            history: VecDeque::new(),
        }
    }

    #[test]
    fn first_sighting_anchors_at_estimated_distance() {
        let mut registry = NetworkRegistry::new();
        let mut assigner = CoordinateAssigner::new();
        let mut records = vec![make_record("HomeNetwork", -40, 1.0)];

        assigner.assign(&mut registry, &mut records);

        let pos = records[0].position.expect("position assigned");
        assert!((pos.radius() - 1.0).abs() < 1e-9);
        assert_eq!(registry.anchor("HomeNetwork"), Some(pos));
    }

    #[test]
    fn repeated_sightings_reuse_the_anchor_verbatim() {
        let mut registry = NetworkRegistry::new();
        let mut assigner = CoordinateAssigner::new();

        let mut first = vec![make_record("HomeNetwork", -55, 3.16)];
        assigner.assign(&mut registry, &mut first);
        let anchor = first[0].position.unwrap();

        // Later cycle, different signal strength: same anchor regardless.
        let mut later = vec![make_record("HomeNetwork", -80, 21.5)];
        assigner.assign(&mut registry, &mut later);
        assert_eq!(later[0].position, Some(anchor));
    }

    #[test]
    fn invalid_first_reading_does_not_anchor() {
        let mut registry = NetworkRegistry::new();
        let mut assigner = CoordinateAssigner::new();
        let mut records = vec![make_record("Broken", 10, -1.0)];

        assigner.assign(&mut registry, &mut records);

        assert!(records[0].position.is_none());
        assert!(registry.anchor("Broken").is_none());

        // A later valid reading anchors normally.
        let mut retry = vec![make_record("Broken", -60, 4.64)];
        assigner.assign(&mut registry, &mut retry);
        assert!(retry[0].position.is_some());
        assert!(registry.anchor("Broken").is_some());
    }

    #[test]
    fn same_name_twice_in_one_cycle_collapses_to_one_anchor() {
        let mut registry = NetworkRegistry::new();
        let mut assigner = CoordinateAssigner::new();
        let mut records = vec![
            make_record("Mesh", -50, 2.15),
            make_record("Mesh", -70, 10.0),
        ];

        assigner.assign(&mut registry, &mut records);

        assert_eq!(registry.tracked_len(), 1);
        assert_eq!(records[0].position, records[1].position);
    }
}
