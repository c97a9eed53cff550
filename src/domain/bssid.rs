//! Hardware identity and raw observation value objects.

use std::fmt;
use std::time::Instant;

use crate::domain::ssid::Ssid;
use crate::error::ScanError;

// ---------------------------------------------------------------------------
// BssidId -- Value Object
// ---------------------------------------------------------------------------

/// A unique BSSID identifier wrapping a 6-byte IEEE 802.11 MAC address.
///
/// This identifies the physical radio an observation came from. Two
/// `BssidId` values are equal when their MAC bytes match. Note that display
/// identity across polling cycles is keyed by network *name*, not by BSSID;
/// the BSSID is carried for display and diagnostics.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BssidId(pub [u8; 6]);

impl BssidId {
    /// Create a `BssidId` from a byte slice.
    ///
    /// Returns an error if the slice is not exactly 6 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScanError> {
        let arr: [u8; 6] = bytes
            .try_into()
            .map_err(|_| ScanError::InvalidMac { len: bytes.len() })?;
        Ok(Self(arr))
    }

    /// Parse a `BssidId` from a colon-separated hex string such as
    /// `"aa:bb:cc:dd:ee:ff"`. Case-insensitive.
    pub fn parse(s: &str) -> Result<Self, ScanError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(ScanError::MacParseFailed {
                input: s.to_owned(),
            });
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            bytes[i] = u8::from_str_radix(part, 16).map_err(|_| ScanError::MacParseFailed {
                input: s.to_owned(),
            })?;
        }
        Ok(Self(bytes))
    }

    /// Return the raw 6-byte MAC address.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Debug for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BssidId({self})")
    }
}

impl fmt::Display for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

// ---------------------------------------------------------------------------
// NetworkObservation -- Value Object
// ---------------------------------------------------------------------------

/// A single observation of an access point from one scan.
///
/// This is the fundamental measurement unit: one access point observed once
/// at a specific point in time. Observations are produced fresh every poll
/// cycle, folded into tracked state, and discarded.
#[derive(Clone, Debug)]
pub struct NetworkObservation {
    /// The broadcast network name, as raw bytes.
    pub ssid: Ssid,
    /// The MAC address of the observed access point.
    pub bssid: BssidId,
    /// Received signal strength in dBm. Negative for physically plausible
    /// readings; a non-negative value is a driver sentinel for "invalid".
    pub rssi_dbm: i32,
    /// When this observation was captured.
    pub timestamp: Instant,
}

impl NetworkObservation {
    /// Convert a driver-reported signal quality percentage (0-100) to an
    /// approximate dBm value.
    ///
    /// Uses the common linear mapping `dBm = (pct / 2) - 100`, which matches
    /// the conversion applied by the Windows WLAN stack.
    pub fn pct_to_dbm(pct: f64) -> f64 {
        (pct / 2.0) - 100.0
    }
}
