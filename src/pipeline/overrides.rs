//! Manual coordinate corrections for names with known-bad signal geometry.
//!
//! Some access points sit where the path-loss model places them absurdly
//! (reflective surroundings, directional antennas). This stage forcibly pins
//! such networks to hand-measured coordinates. It runs last, after smoothing,
//! so pinned entities never participate in jitter damping.

use crate::domain::network::{NetworkRecord, Position};

/// A name predicate for the override table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    /// Matches the decoded name exactly.
    Exact(String),
    /// Matches any decoded name containing the substring.
    Contains(String),
}

impl NamePattern {
    /// Whether this pattern matches the given decoded name.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(literal) => name == literal,
            Self::Contains(marker) => name.contains(marker),
        }
    }
}

/// One override: a pattern and the coordinate it pins matches to.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    /// The name predicate.
    pub pattern: NamePattern,
    /// The fixed coordinate applied to every match.
    pub position: Position,
}

/// Ordered override table, checked top to bottom; first match wins.
#[derive(Debug, Clone)]
pub struct OverrideTable {
    rules: Vec<OverrideRule>,
}

impl OverrideTable {
    /// Create a table from an ordered rule list.
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    /// A table with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The configured rules, in evaluation order.
    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// Pin every matching record to its rule's coordinate.
    pub fn apply(&self, records: &mut [NetworkRecord]) {
        for record in records {
            if let Some(rule) = self.rules.iter().find(|r| r.pattern.matches(&record.name)) {
                record.position = Some(rule.position);
            }
        }
    }
}

impl Default for OverrideTable {
    /// The two hand-measured corrections for known-bad geometry.
    fn default() -> Self {
        Self::new(vec![
            OverrideRule {
                pattern: NamePattern::Exact("OIS Airplane Crew".to_owned()),
                position: Position::new(0.43, -0.63),
            },
            OverrideRule {
                pattern: NamePattern::Contains("*Not-connectable".to_owned()),
                position: Position::new(0.60, -0.50),
            },
        ])
    }
}
