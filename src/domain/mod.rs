//! Domain types for access point observation and tracking.

pub mod bssid;
pub mod network;
pub mod registry;
pub mod ssid;

pub use bssid::{BssidId, NetworkObservation};
pub use network::{NetworkRecord, Position};
pub use registry::{NetworkRegistry, HISTORY_CAPACITY};
pub use ssid::{Ssid, SsidEncoding, RAW_PREFIX};
