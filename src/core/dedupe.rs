//! Merging station lists from several sources into a set of unique stations.
//!
//! Two records are the same physical station when their names are equal ignoring the case,
//! and both their latitudes and longitudes differ by less than [`TOLERANCE_DEGREES`].
//!
//! The scan is `O(n·m)`, which is fine for a few hundred stations per page.
//! A spatial index is needed before feeding it substantially larger batches.

use crate::core::station::{Coordinates, Station};

/// Roughly 89 metres.
pub const TOLERANCE_DEGREES: f64 = 0.0008;

/// Pre-computed matching key of an accepted station.
struct Key {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Key {
    fn new(station: &Station) -> Self {
        let Coordinates { latitude, longitude } = station.coordinates();
        Self { name: station.name.to_lowercase(), latitude, longitude }
    }

    fn matches(&self, other: &Self) -> bool {
        self.name == other.name
            && (self.latitude - other.latitude).abs() < TOLERANCE_DEGREES
            && (self.longitude - other.longitude).abs() < TOLERANCE_DEGREES
    }
}

impl Station {
    /// Check whether both records describe the same physical station.
    #[must_use]
    pub fn is_duplicate_of(&self, other: &Self) -> bool {
        Key::new(self).matches(&Key::new(other))
    }
}

/// Merge the incoming stations into the existing ones.
///
/// The existing stations go first, followed by the admitted incoming stations in their original
/// order. The scan covers the existing stations too, so duplicates among them are dropped as well,
/// and the output never contains two duplicates.
///
/// The first seen record wins, later duplicates are dropped as is: no fields are copied
/// over to the kept record.
#[must_use]
pub fn merge_stations(
    existing: impl IntoIterator<Item = Station>,
    incoming: impl IntoIterator<Item = Station>,
) -> Vec<Station> {
    let mut keys: Vec<Key> = Vec::new();
    let mut merged = Vec::new();
    for station in existing.into_iter().chain(incoming) {
        let key = Key::new(&station);
        if !keys.iter().any(|accepted| accepted.matches(&key)) {
            keys.push(key);
            merged.push(station);
        }
    }
    merged
}

/// Drop the duplicates from a single list.
#[must_use]
pub fn dedupe_stations(stations: impl IntoIterator<Item = Station>) -> Vec<Station> {
    merge_stations(Vec::new(), stations)
}
