//! Sensor kinds, readings, and the all-sensor snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value reported by a sensor. Any value is accepted, including zero and negatives.
pub type Reading = i32;

/// The fixed set of sensors a device reports.
///
/// Declaration order is significant: it drives [`SensorKind::ALL`] and the
/// key order of a serialized [`SensorSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SensorKind {
    Temperature,
    Pressure,
}

impl SensorKind {
    /// Every declared sensor kind, in declaration order.
    pub const ALL: [Self; 2] = [Self::Temperature, Self::Pressure];

    /// Wire name of the sensor, as used in JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "TEMPERATURE",
            Self::Pressure => "PRESSURE",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current reading of every sensor, keyed by kind.
///
/// Serializes as a flat JSON object such as `{"TEMPERATURE":21,"PRESSURE":1013}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorSnapshot(BTreeMap<SensorKind, Reading>);

impl SensorSnapshot {
    /// Record `value` for `kind`, replacing any previous entry.
    pub fn insert(&mut self, kind: SensorKind, value: Reading) {
        self.0.insert(kind, value);
    }

    /// Reading for `kind`, if present.
    #[must_use]
    pub fn get(&self, kind: SensorKind) -> Option<Reading> {
        self.0.get(&kind).copied()
    }

    /// Whether every declared sensor kind has a reading.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        SensorKind::ALL.iter().all(|kind| self.0.contains_key(kind))
    }
}

impl FromIterator<(SensorKind, Reading)> for SensorSnapshot {
    fn from_iter<I: IntoIterator<Item = (SensorKind, Reading)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
