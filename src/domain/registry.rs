//! Tracked per-network state that survives across polling cycles.
//!
//! Displayed records are rebuilt from scratch each cycle, so everything that
//! must persist -- the anchor coordinate chosen on first sighting, the last
//! displayed (smoothed) coordinate, and the bounded signal history -- lives
//! here, keyed by decoded network name. The registry is owned by the
//! orchestration layer and passed by mutable reference into each pipeline
//! stage; there is no ambient global state.
//!
//! Identity is the decoded name: two physically distinct access points
//! broadcasting the same name collapse into one tracked entity. This is a
//! known limitation of name-keyed tracking, kept intentionally.
//!
//! Entries are never evicted. Memory grows with the number of distinct names
//! seen over the process lifetime, which is acceptable for a desktop session;
//! only the per-name history is bounded.

use std::collections::{HashMap, VecDeque};

use crate::domain::network::Position;

/// Maximum number of signal samples retained per network name.
pub const HISTORY_CAPACITY: usize = 100;

/// Process-lifetime tracked state for every network name ever observed.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    /// First-ever coordinate per name. Once set, reused verbatim on every
    /// later sighting; a network's bearing never rotates again.
    anchors: HashMap<String, Position>,
    /// Last frame's smoothed output per name, the anchor for the next
    /// frame's exponential blend.
    displayed: HashMap<String, Position>,
    /// Bounded recent signal history per name, oldest first.
    history: HashMap<String, VecDeque<i32>>,
}

impl NetworkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The anchor coordinate assigned to `name`, if one exists.
    pub fn anchor(&self, name: &str) -> Option<Position> {
        self.anchors.get(name).copied()
    }

    /// Record the first-ever coordinate for `name`.
    ///
    /// Later calls for the same name overwrite, but the coordinate assigner
    /// never calls this twice for one name.
    pub fn set_anchor(&mut self, name: &str, position: Position) {
        self.anchors.insert(name.to_owned(), position);
    }

    /// The coordinate displayed for `name` on the previous cycle, if any.
    pub fn displayed(&self, name: &str) -> Option<Position> {
        self.displayed.get(name).copied()
    }

    /// Record the coordinate displayed for `name` this cycle.
    pub fn set_displayed(&mut self, name: &str, position: Position) {
        self.displayed.insert(name.to_owned(), position);
    }

    /// Append a signal sample to the history for `name`, evicting the oldest
    /// sample first when the ring is at capacity.
    pub fn push_history(&mut self, name: &str, rssi_dbm: i32) {
        let ring = self
            .history
            .entry(name.to_owned())
            .or_insert_with(|| VecDeque::with_capacity(HISTORY_CAPACITY));
        if ring.len() >= HISTORY_CAPACITY {
            ring.pop_front();
        }
        ring.push_back(rssi_dbm);
    }

    /// The recorded signal history for `name`, oldest first.
    pub fn history(&self, name: &str) -> Option<&VecDeque<i32>> {
        self.history.get(name)
    }

    /// The number of distinct names with an assigned anchor.
    pub fn tracked_len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether no name has been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
