//! Deterministic synthetic scan source for demos and tests.

use std::time::Instant;

use crate::domain::bssid::{BssidId, NetworkObservation};
use crate::domain::ssid::Ssid;
use crate::error::ScanError;
use crate::port::scan_source::ScanSource;

/// One synthetic access point definition.
struct SimulatedAp {
    ssid: &'static [u8],
    bssid: [u8; 6],
    /// Baseline signal strength in dBm.
    base_dbm: i32,
    /// Per-AP phase offset so the wobbles are not synchronised.
    phase: f64,
}

const SIMULATED_APS: &[SimulatedAp] = &[
    SimulatedAp {
        ssid: b"HomeNetwork",
        bssid: [0xD8, 0x32, 0x14, 0xB0, 0xA0, 0x3E],
        base_dbm: -48,
        phase: 0.0,
    },
    SimulatedAp {
        ssid: b"GuestWifi",
        bssid: [0x11, 0x22, 0x33, 0x44, 0x55, 0x66],
        base_dbm: -67,
        phase: 1.3,
    },
    SimulatedAp {
        ssid: b"OfficeNet 5G",
        bssid: [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE],
        base_dbm: -74,
        phase: 2.6,
    },
    // A name with bytes outside printable ASCII, to exercise the hex
    // fallback path end to end.
    SimulatedAp {
        ssid: &[0xE2, 0x98, 0x82, 0xFF],
        bssid: [0x02, 0x00, 0x00, 0x00, 0x00, 0x01],
        base_dbm: -82,
        phase: 3.9,
    },
];

/// Scan source that fabricates a stable set of access points with a slow,
/// deterministic signal wobble.
///
/// Useful on machines without a scannable radio and in examples; the wobble
/// is a pure function of the cycle counter, so runs are reproducible.
pub struct SimulatedScanner {
    cycle: u64,
}

impl SimulatedScanner {
    /// Create a simulated scanner.
    pub fn new() -> Self {
        Self { cycle: 0 }
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSource for SimulatedScanner {
    fn scan(&mut self) -> Result<Vec<NetworkObservation>, ScanError> {
        self.cycle += 1;
        let timestamp = Instant::now();
        #[allow(clippy::cast_precision_loss)]
        let t = self.cycle as f64;

        let observations = SIMULATED_APS
            .iter()
            .map(|ap| {
                // +/- 4 dBm sinusoidal wobble around the baseline.
                #[allow(clippy::cast_possible_truncation)]
                let wobble = (4.0 * (0.7 * t + ap.phase).sin()).round() as i32;
                NetworkObservation {
                    ssid: Ssid::from_bytes(ap.ssid.to_vec()),
                    bssid: BssidId(ap.bssid),
                    rssi_dbm: ap.base_dbm + wobble,
                    timestamp,
                }
            })
            .collect();

        Ok(observations)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
