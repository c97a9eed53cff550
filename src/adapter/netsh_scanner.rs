//! Adapter that scans access points by invoking
//! `netsh wlan show networks mode=bssid` and parsing the textual output.
//!
//! # Design notes
//!
//! `netsh` reports signal quality as a percentage, not dBm; the percentage is
//! converted with the linear mapping used by the Windows WLAN stack
//! ([`NetworkObservation::pct_to_dbm`]). The command covers every wireless
//! interface on the machine in one invocation, so interface enumeration
//! happens inside the tool, not here.
//!
//! # Platform
//!
//! Windows only at runtime. The parser itself is platform-independent and
//! fully unit-tested; on other platforms the subprocess spawn fails with a
//! [`ScanError::Process`].

use std::process::Command;
use std::time::Instant;

use crate::domain::bssid::{BssidId, NetworkObservation};
use crate::domain::ssid::Ssid;
use crate::error::ScanError;
use crate::port::scan_source::ScanSource;

// ---------------------------------------------------------------------------
// NetshScanner
// ---------------------------------------------------------------------------

/// Synchronous scanner that shells out to `netsh wlan show networks mode=bssid`.
///
/// Each call spawns a subprocess, captures stdout, and parses the result into
/// [`NetworkObservation`] values. The call blocks for the duration of the
/// subprocess.
#[derive(Debug, Default)]
pub struct NetshScanner;

impl NetshScanner {
    /// Create a new scanner instance.
    pub fn new() -> Self {
        Self
    }

    /// Run the scan subprocess and parse its output.
    pub fn scan_sync(&self) -> Result<Vec<NetworkObservation>, ScanError> {
        let output = Command::new("netsh")
            .args(["wlan", "show", "networks", "mode=bssid"])
            .output()
            .map_err(|e| ScanError::Process(format!("failed to run netsh: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::Process(format!(
                "netsh exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_netsh_output(&stdout))
    }
}

impl ScanSource for NetshScanner {
    fn scan(&mut self) -> Result<Vec<NetworkObservation>, ScanError> {
        self.scan_sync()
    }

    fn name(&self) -> &'static str {
        "netsh"
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Intermediate accumulator for one BSSID sub-block.
#[derive(Default)]
struct BssidBlock {
    mac: Option<BssidId>,
    signal_pct: Option<f64>,
}

impl BssidBlock {
    /// Convert the accumulated block into an observation.
    ///
    /// Returns `None` when the mandatory MAC address is missing (the BSSID
    /// line contained an unparseable address).
    fn into_observation(self, ssid: &str, timestamp: Instant) -> Option<NetworkObservation> {
        let bssid = self.mac?;
        let signal_pct = self.signal_pct.unwrap_or(0.0);
        #[allow(clippy::cast_possible_truncation)]
        let rssi_dbm = NetworkObservation::pct_to_dbm(signal_pct).round() as i32;

        Some(NetworkObservation {
            ssid: Ssid::from(ssid),
            bssid,
            rssi_dbm,
            timestamp,
        })
    }
}

/// Parse the text output of `netsh wlan show networks mode=bssid`.
///
/// The parser walks line-by-line, tracking the current SSID context and
/// accumulating fields for each BSSID sub-block; a new SSID header, a new
/// BSSID header, or the end of input flushes the current block. Lines that
/// match no expected pattern are silently skipped, so interface headers and
/// localised messages never cause an error, and a malformed block degrades
/// to a skipped observation rather than a failed cycle.
pub fn parse_netsh_output(output: &str) -> Vec<NetworkObservation> {
    let timestamp = Instant::now();
    let mut results: Vec<NetworkObservation> = Vec::new();

    let mut current_ssid = String::new();
    let mut current_block: Option<BssidBlock> = None;

    for line in output.lines() {
        let trimmed = line.trim();

        // -- SSID header: "SSID 1 : MyNetwork" -------------------------------
        if let Some(ssid_value) = try_parse_ssid_line(trimmed) {
            if let Some(block) = current_block.take() {
                if let Some(obs) = block.into_observation(&current_ssid, timestamp) {
                    results.push(obs);
                }
            }
            current_ssid = ssid_value;
            continue;
        }

        // -- BSSID header: "BSSID 1 : d8:32:14:b0:a0:3e" ---------------------
        if trimmed.to_ascii_uppercase().starts_with("BSSID") {
            if let Some(block) = current_block.take() {
                if let Some(obs) = block.into_observation(&current_ssid, timestamp) {
                    results.push(obs);
                }
            }
            // An unparseable MAC still opens a block so the following field
            // lines are consumed rather than attributed to the previous one.
            let mac = split_kv(trimmed).and_then(|(_, v)| BssidId::parse(v.trim()).ok());
            current_block = Some(BssidBlock {
                mac,
                ..Default::default()
            });
            continue;
        }

        // Signal lines are only meaningful inside a BSSID block.
        let Some(block) = current_block.as_mut() else {
            continue;
        };

        // -- Signal: "Signal             : 84%" ------------------------------
        if let Some(pct) = try_parse_signal_line(trimmed) {
            block.signal_pct = Some(pct);
        }
    }

    // Flush the final block.
    if let Some(block) = current_block.take() {
        if let Some(obs) = block.into_observation(&current_ssid, timestamp) {
            results.push(obs);
        }
    }

    results
}

/// Parse an SSID header line (`"SSID <N> : <name>"`).
///
/// The name may be empty for hidden networks. Returns `None` when the line
/// does not match.
fn try_parse_ssid_line(line: &str) -> Option<String> {
    let upper = line.to_ascii_uppercase();
    // "BSSID ..." lines do not start with "SSID", so they fall through to
    // the BSSID branch in the caller.
    if !upper.starts_with("SSID") {
        return None;
    }
    let (_key, value) = split_kv(line)?;
    Some(value.to_owned())
}

/// Parse a Signal line and return the percentage value.
///
/// Accepts `"Signal             : 84%"` and values without the trailing `%`.
fn try_parse_signal_line(line: &str) -> Option<f64> {
    let upper = line.to_ascii_uppercase();
    if !upper.starts_with("SIGNAL") {
        return None;
    }
    let (_key, value) = split_kv(line)?;
    value.trim_end_matches('%').trim().parse::<f64>().ok()
}

/// Split a netsh key-value line on the first `" : "` separator.
///
/// The space-colon-space convention avoids mis-splitting on the colons inside
/// MAC addresses or names that happen to contain colons. A line ending in
/// `" :"` yields an empty value (hidden networks).
fn split_kv(line: &str) -> Option<(&str, &str)> {
    if let Some(idx) = line.find(" : ") {
        return Some((line[..idx].trim(), line[idx + 3..].trim()));
    }
    if let Some(stripped) = line.strip_suffix(" :") {
        return Some((stripped.trim(), ""));
    }
    None
}
