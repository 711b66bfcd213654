//! Static station catalog.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    core::{
        dedupe::dedupe_stations,
        station::{Coordinates, Source, Station},
    },
    prelude::*,
    quantity::power::Kilowatts,
};

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<Vec<Station>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read the station file `{}`", path.display()))?;
    let stations = parse(&json)
        .with_context(|| format!("failed to parse the station file `{}`", path.display()))?;
    info!(n_stations = stations.len(), "loaded");
    Ok(stations)
}

/// Parse the JSON array of station records.
///
/// Records without valid coordinates are skipped, and so are the duplicates within the catalog.
pub fn parse(json: &str) -> Result<Vec<Station>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    Ok(dedupe_stations(records.into_iter().filter_map(Record::into_station)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(i64),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[serde_as]
#[derive(Deserialize)]
struct Record {
    id: RecordId,
    name: String,

    #[serde(alias = "lat")]
    latitude: Option<f64>,

    #[serde(alias = "lng", alias = "lon")]
    longitude: Option<f64>,

    #[serde(default)]
    address: Option<String>,

    #[serde(default)]
    provider: Option<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    connectors: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    power_kw: f64,
}

impl Record {
    fn into_station(self) -> Option<Station> {
        let id = Source::Local.qualify(&self.id.into_string());
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            warn!(%id, name = %self.name, "skipping the station without coordinates");
            return None;
        };
        if !Coordinates::new(latitude, longitude).is_valid() {
            warn!(%id, name = %self.name, latitude, longitude, "skipping invalid coordinates");
            return None;
        }
        Some(Station {
            id,
            name: self.name,
            latitude,
            longitude,
            address: self.address.filter(|address| !address.is_empty()),
            provider: self.provider.filter(|provider| !provider.is_empty()),
            connectors: self.connectors,
            power: Kilowatts(self.power_kw.max(0.0)),
            source: Source::Local,
        })
    }
}
