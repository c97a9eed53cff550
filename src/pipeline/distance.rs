//! Log-distance path-loss distance estimation.

/// Reference received power at 1 meter, in dBm.
pub const RSSI_REF_DBM: f64 = -40.0;

/// Path-loss exponent for a lossy indoor environment.
pub const PATH_LOSS_EXPONENT: f64 = 3.0;

/// Sentinel distance returned for physically invalid readings.
///
/// Callers must special-case this value: it is never plotted or averaged.
pub const DISTANCE_INVALID: f64 = -1.0;

/// Estimate the distance to an access point from one signal sample.
///
/// Uses the log-distance path-loss model
/// `d = 10 ^ ((RSSI_REF - rssi) / (10 * n))` with the reference power and
/// exponent fixed above. At -40 dBm the estimate is exactly 1 meter; weaker
/// (more negative) readings give larger distances.
///
/// A non-negative reading is a driver sentinel for "invalid" and yields
/// [`DISTANCE_INVALID`].
#[must_use]
pub fn estimate_distance(rssi_dbm: i32) -> f64 {
    if rssi_dbm > 0 {
        return DISTANCE_INVALID;
    }
    10f64.powf((RSSI_REF_DBM - f64::from(rssi_dbm)) / (10.0 * PATH_LOSS_EXPONENT))
}
