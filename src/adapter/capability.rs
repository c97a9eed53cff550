//! Driver capability probe.
//!
//! Some wireless drivers expose true RSSI, others only a quality percentage,
//! and some neither. The probe shells out to `netsh wlan show drivers` and
//! inspects the report so the user can tell up front which fidelity of
//! signal data to expect.

use std::process::Command;

use crate::error::ScanError;

/// What the wireless driver reports about signal measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverCapability {
    /// The driver exposes RSSI in dBm.
    pub rssi: bool,
    /// The driver exposes a signal quality percentage.
    pub signal_pct: bool,
}

impl DriverCapability {
    /// One-line human-readable summary.
    pub fn summary(&self) -> &'static str {
        match (self.rssi, self.signal_pct) {
            (true, _) => "driver reports RSSI in dBm",
            (false, true) => "driver reports signal quality percentage only",
            (false, false) => "driver reports neither RSSI nor signal level",
        }
    }
}

/// Inspect a `netsh wlan show drivers` report for signal support markers.
///
/// Text-based and locale-tolerant: both the English and the transliterated
/// field names seen in localized Windows builds mention `RSSI` / `Signal`
/// verbatim when supported.
pub fn parse_driver_report(report: &str) -> DriverCapability {
    DriverCapability {
        rssi: report.contains("RSSI"),
        signal_pct: report.contains("Signal"),
    }
}

/// Run `netsh wlan show drivers` and parse the capability report.
///
/// Windows only at runtime; elsewhere the subprocess spawn fails with a
/// [`ScanError::Process`].
pub fn probe_driver_capability() -> Result<DriverCapability, ScanError> {
    let output = Command::new("netsh")
        .args(["wlan", "show", "drivers"])
        .output()
        .map_err(|e| ScanError::Process(format!("failed to run netsh: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScanError::Unavailable {
            reason: format!("netsh exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(parse_driver_report(&String::from_utf8_lossy(&output.stdout)))
}
