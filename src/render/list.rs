//! List view rendering: one table row per visible network.

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::domain::network::NetworkRecord;

/// Signal at or above this level renders green.
const STRONG_DBM: i32 = -60;
/// Signal at or above this level (but below strong) renders yellow.
const MEDIUM_DBM: i32 = -75;

/// One rendered table row.
#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "BSSID")]
    bssid: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Distance")]
    distance: String,
}

/// One machine-readable row for `--json` output.
#[derive(Serialize)]
struct JsonRow<'a> {
    ssid: &'a str,
    bssid: String,
    signal_dbm: i32,
    /// `null` when the reading was physically invalid.
    distance_m: Option<f64>,
}

/// Render the record collection as a colored terminal table.
pub fn render_table(records: &[NetworkRecord]) -> String {
    let rows: Vec<ListRow> = records
        .iter()
        .map(|record| ListRow {
            ssid: record.name.clone(),
            bssid: record.bssid.to_string(),
            signal: format_signal(record.rssi_dbm),
            distance: format_distance(record),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Render the record collection as a JSON array.
pub fn render_json(records: &[NetworkRecord]) -> serde_json::Result<String> {
    let rows: Vec<JsonRow<'_>> = records
        .iter()
        .map(|record| JsonRow {
            ssid: &record.name,
            bssid: record.bssid.to_string(),
            signal_dbm: record.rssi_dbm,
            distance_m: record.has_valid_distance().then_some(record.distance_m),
        })
        .collect();

    serde_json::to_string_pretty(&rows)
}

/// `"<signal> dBm"`, colored by signal zone.
fn format_signal(rssi_dbm: i32) -> String {
    let text = format!("{rssi_dbm} dBm");
    if rssi_dbm >= 0 {
        // Driver sentinel for an invalid reading.
        text.dimmed().to_string()
    } else if rssi_dbm >= STRONG_DBM {
        text.green().to_string()
    } else if rssi_dbm >= MEDIUM_DBM {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// `"<distance> m"`, or `"n/a"` for the invalid-distance sentinel.
fn format_distance(record: &NetworkRecord) -> String {
    if record.has_valid_distance() {
        format!("{:.2} m", record.distance_m)
    } else {
        "n/a".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bssid::BssidId;
    use crate::pipeline::distance::DISTANCE_INVALID;
    use std::collections::VecDeque;

    fn make_record(name: &str, rssi_dbm: i32, distance_m: f64) -> NetworkRecord {
        NetworkRecord {
            name: name.to_owned(),
            bssid: BssidId([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]),
            rssi_dbm,
            distance_m,
            position: None,
            history: VecDeque::new(),
        }
    }

    #[test]
    fn table_contains_all_columns() {
        colored::control::set_override(false);
        let table = render_table(&[make_record("HomeNetwork", -40, 1.0)]);
        assert!(table.contains("HomeNetwork"));
        assert!(table.contains("AA:BB:CC:DD:EE:FF"));
        assert!(table.contains("-40 dBm"));
        assert!(table.contains("1.00 m"));
    }

    #[test]
    fn invalid_distance_renders_not_available() {
        colored::control::set_override(false);
        let table = render_table(&[make_record("Broken", 10, DISTANCE_INVALID)]);
        assert!(table.contains("n/a"));
        assert!(!table.contains("-1.00 m"));
    }

    #[test]
    fn json_uses_null_for_invalid_distance() {
        let json = render_json(&[
            make_record("A", -50, 2.15),
            make_record("B", 5, DISTANCE_INVALID),
        ])
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["ssid"], "A");
        assert!((parsed[0]["distance_m"].as_f64().unwrap() - 2.15).abs() < 1e-9);
        assert!(parsed[1]["distance_m"].is_null());
        assert_eq!(parsed[1]["signal_dbm"], 5);
    }
}
