//! Displayed network entities and plot coordinates.

use std::collections::VecDeque;

use crate::domain::bssid::BssidId;
use crate::pipeline::distance::DISTANCE_INVALID;

// ---------------------------------------------------------------------------
// Position -- Value Object
// ---------------------------------------------------------------------------

/// A 2-D plot coordinate in meters, relative to the observer at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// East-west offset in meters.
    pub x: f64,
    /// North-south offset in meters.
    pub y: f64,
}

impl Position {
    /// Create a position from Cartesian components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a position from a radius (meters) and bearing (radians).
    pub fn from_polar(radius: f64, bearing: f64) -> Self {
        Self {
            x: radius * bearing.cos(),
            y: radius * bearing.sin(),
        }
    }

    /// Distance from the observer at the origin, in meters.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Bearing from the observer, in radians.
    pub fn bearing(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Exponentially blend this (fresh) coordinate toward a previously
    /// displayed one: `alpha * self + (1 - alpha) * previous`.
    pub fn blend(self, previous: Position, alpha: f64) -> Position {
        Position {
            x: alpha * self.x + (1.0 - alpha) * previous.x,
            y: alpha * self.y + (1.0 - alpha) * previous.y,
        }
    }
}

// ---------------------------------------------------------------------------
// NetworkRecord -- displayed entity
// ---------------------------------------------------------------------------

/// One displayed network, rebuilt from scratch every poll cycle.
///
/// Records carry the per-cycle measurements plus state recalled from the
/// [`NetworkRegistry`](crate::domain::registry::NetworkRegistry) by name:
/// the smoothed plot coordinate and a copy of the bounded signal history.
#[derive(Debug, Clone)]
pub struct NetworkRecord {
    /// Decoded display name (see [`Ssid::decode`](crate::domain::ssid::Ssid::decode)).
    pub name: String,
    /// Hardware identifier of the access point behind this row.
    pub bssid: BssidId,
    /// Signal strength this cycle, in dBm.
    pub rssi_dbm: i32,
    /// Estimated distance in meters, or the `-1.0` sentinel when the reading
    /// was physically invalid.
    pub distance_m: f64,
    /// Smoothed plot coordinate. `None` when no coordinate could be
    /// established this cycle (an invalid first reading); such records are
    /// listed but never plotted.
    pub position: Option<Position>,
    /// Recent signal history for this name, oldest first, at most
    /// [`HISTORY_CAPACITY`](crate::domain::registry::HISTORY_CAPACITY) samples.
    pub history: VecDeque<i32>,
}

impl NetworkRecord {
    /// Whether the distance estimate is usable (not the invalid sentinel).
    pub fn has_valid_distance(&self) -> bool {
        self.distance_m > DISTANCE_INVALID
    }
}
