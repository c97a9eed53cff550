//! Adapter that scans access points on Linux by invoking `iw dev <iface> scan`.
//!
//! # Permissions
//!
//! - `iw dev <iface> scan` requires `CAP_NET_ADMIN` (typically root).
//! - `iw dev <iface> scan dump` reads cached results and may work without
//!   root on some distributions, at the cost of stale data.
//!
//! # Platform
//!
//! Linux only. Gated behind `#[cfg(target_os = "linux")]` at the module level.

use std::process::Command;
use std::time::Instant;

use crate::domain::bssid::{BssidId, NetworkObservation};
use crate::domain::ssid::Ssid;
use crate::error::ScanError;
use crate::port::scan_source::ScanSource;

// ---------------------------------------------------------------------------
// IwScanner
// ---------------------------------------------------------------------------

/// Synchronous scanner that shells out to `iw dev <interface> scan`.
///
/// Each call spawns a subprocess, captures stdout, and parses the BSS
/// stanzas into [`NetworkObservation`] values.
pub struct IwScanner {
    /// Wireless interface name (e.g. `"wlan0"`, `"wlp2s0"`).
    interface: String,
    /// If true, use `scan dump` (cached results) instead of triggering a new
    /// scan.
    use_dump: bool,
}

impl IwScanner {
    /// Create a scanner for the default interface `wlan0`.
    pub fn new() -> Self {
        Self::with_interface("wlan0")
    }

    /// Create a scanner for a specific wireless interface.
    pub fn with_interface(iface: impl Into<String>) -> Self {
        Self {
            interface: iface.into(),
            use_dump: false,
        }
    }

    /// Use `scan dump` instead of `scan` to read cached results without root.
    pub fn use_cached(mut self) -> Self {
        self.use_dump = true;
        self
    }

    /// Run the scan subprocess and parse its output.
    pub fn scan_sync(&self) -> Result<Vec<NetworkObservation>, ScanError> {
        let args: Vec<&str> = if self.use_dump {
            vec!["dev", &self.interface, "scan", "dump"]
        } else {
            vec!["dev", &self.interface, "scan"]
        };

        let output = Command::new("iw").args(&args).output().map_err(|e| {
            ScanError::Process(format!("failed to run `iw {}`: {e}", args.join(" ")))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::Process(format!(
                "iw exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_iw_scan_output(&stdout))
    }
}

impl Default for IwScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSource for IwScanner {
    fn scan(&mut self) -> Result<Vec<NetworkObservation>, ScanError> {
        self.scan_sync()
    }

    fn name(&self) -> &'static str {
        "iw"
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Intermediate accumulator for fields within a single BSS stanza.
#[derive(Default)]
struct BssStanza {
    bssid: Option<String>,
    ssid: Option<Vec<u8>>,
    signal_dbm: Option<f64>,
}

impl BssStanza {
    /// Flush this stanza into an observation, if enough data accumulated.
    fn flush(self, timestamp: Instant) -> Option<NetworkObservation> {
        let bssid = BssidId::parse(&self.bssid?).ok()?;
        #[allow(clippy::cast_possible_truncation)]
        let rssi_dbm = self.signal_dbm.unwrap_or(-90.0).round() as i32;

        Some(NetworkObservation {
            ssid: Ssid::from_bytes(self.ssid.unwrap_or_default()),
            bssid,
            rssi_dbm,
            timestamp,
        })
    }
}

/// Parse the text output of `iw dev <iface> scan [dump]`.
///
/// The output consists of BSS stanzas, each starting with
/// `BSS aa:bb:cc:dd:ee:ff(on wlan0)` at column 0, followed by indented
/// key-value lines.
pub fn parse_iw_scan_output(output: &str) -> Vec<NetworkObservation> {
    let now = Instant::now();
    let mut results = Vec::new();
    let mut current: Option<BssStanza> = None;

    for line in output.lines() {
        // New BSS stanza starts with "BSS " at column 0.
        if let Some(rest) = line.strip_prefix("BSS ") {
            if let Some(stanza) = current.take() {
                if let Some(obs) = stanza.flush(now) {
                    results.push(obs);
                }
            }

            // "BSS aa:bb:cc:dd:ee:ff(on wlan0)" or
            // "BSS aa:bb:cc:dd:ee:ff -- associated".
            let mac_end = rest
                .find(|c: char| !c.is_ascii_hexdigit() && c != ':')
                .unwrap_or(rest.len());
            let mac = &rest[..mac_end];

            if mac.len() == 17 {
                current = Some(BssStanza {
                    bssid: Some(mac.to_owned()),
                    ..Default::default()
                });
            }
            continue;
        }

        // Indented lines belong to the current stanza.
        let trimmed = line.trim();
        if let Some(stanza) = current.as_mut() {
            if let Some(rest) = trimmed.strip_prefix("SSID:") {
                stanza.ssid = Some(unescape_iw_ssid(rest.trim()));
            } else if let Some(rest) = trimmed.strip_prefix("signal:") {
                // "signal: -52.00 dBm"
                stanza.signal_dbm = parse_signal_dbm(rest);
            }
        }
    }

    // Flush the last stanza.
    if let Some(stanza) = current.take() {
        if let Some(obs) = stanza.flush(now) {
            results.push(obs);
        }
    }

    results
}

/// Decode the `\xNN` escapes `iw` uses for bytes outside printable ASCII.
///
/// The returned bytes are the name exactly as broadcast, so undecodable
/// names reach the display layer intact and fall back to the hex dump there.
fn unescape_iw_ssid(escaped: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(escaped.len());
    let bytes = escaped.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\'
            && i + 3 < bytes.len()
            && bytes[i + 1] == b'x'
            && bytes[i + 2].is_ascii_hexdigit()
            && bytes[i + 3].is_ascii_hexdigit()
        {
            if let Ok(value) = u8::from_str_radix(&escaped[i + 2..i + 4], 16) {
                out.push(value);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    out
}

/// Parse a signal strength string like `"-52.00 dBm"` into dBm.
fn parse_signal_dbm(s: &str) -> Option<f64> {
    s.trim().split_whitespace().next()?.parse().ok()
}
