//! Adapter implementations for the [`ScanSource`](crate::port::ScanSource) port.
//!
//! Each adapter targets a specific platform scanning mechanism:
//! - [`NetshScanner`]: parses `netsh wlan show networks mode=bssid` (Windows).
//! - [`IwScanner`]: parses `iw dev <iface> scan` output (Linux).
//! - [`CompositeScanner`]: aggregates several sources, skipping failures.
//! - [`SimulatedScanner`]: deterministic synthetic observations.
//!
//! [`capability`] probes the wireless driver for the fidelity of signal data
//! it can report.

pub mod capability;
pub mod composite;
pub mod netsh_scanner;
pub mod simulated;

#[cfg(target_os = "linux")]
pub mod iw_scanner;

pub use capability::{probe_driver_capability, DriverCapability};
pub use composite::CompositeScanner;
pub use netsh_scanner::{parse_netsh_output, NetshScanner};
pub use simulated::SimulatedScanner;

#[cfg(target_os = "linux")]
pub use iw_scanner::{parse_iw_scan_output, IwScanner};
