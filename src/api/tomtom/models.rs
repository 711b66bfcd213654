use itertools::Itertools;
use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};

use crate::{
    core::station::{Coordinates, Source, Station},
    prelude::*,
    quantity::power::Kilowatts,
};

/// Name of a POI that came without one.
const DEFAULT_NAME: &str = "EV Station";

/// Number of category tags kept as connector types.
const MAX_CONNECTORS: usize = 3;

#[derive(Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn into_stations(self) -> Vec<Station> {
        self.results
            .into_iter()
            .enumerate()
            .filter_map(|(index, result)| result.into_station(index))
            .collect_vec()
    }
}

#[derive(Deserialize)]
struct SearchResult {
    id: Option<String>,

    #[serde(default)]
    poi: Poi,

    address: Option<Address>,
    position: Option<Position>,

    #[serde(rename = "chargingPark")]
    charging_park: Option<ChargingPark>,
}

impl SearchResult {
    fn into_station(self, index: usize) -> Option<Station> {
        let id = Source::RemoteProvider.qualify(&self.id.unwrap_or_else(|| index.to_string()));
        let Some(coordinates) = self.position.and_then(Position::coordinates) else {
            debug!(%id, "skipping the result without a position");
            return None;
        };
        if !coordinates.is_valid() {
            debug!(%id, ?coordinates, "skipping the result with invalid coordinates");
            return None;
        }
        let power = self
            .charging_park
            .into_iter()
            .flat_map(|charging_park| charging_park.connectors)
            .filter_map(|connector| connector.rated_power_kw)
            .filter(|rated_power| rated_power.is_finite() && *rated_power > 0.0)
            .map(Kilowatts)
            .max()
            .unwrap_or(Kilowatts::ZERO);
        Some(Station {
            id,
            name: self
                .poi
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            address: self.address.and_then(|address| address.freeform).filter(|it| !it.is_empty()),
            provider: self
                .poi
                .brands
                .into_iter()
                .find_map(|brand| brand.name)
                .filter(|name| !name.trim().is_empty()),
            connectors: self.poi.categories.into_iter().take(MAX_CONNECTORS).collect(),
            power,
            source: Source::RemoteProvider,
        })
    }
}

#[derive(Default, Deserialize)]
struct Poi {
    name: Option<String>,

    #[serde(default)]
    brands: Vec<Brand>,

    #[serde(default)]
    categories: Vec<String>,
}

#[derive(Deserialize)]
struct Brand {
    name: Option<String>,
}

#[derive(Deserialize)]
struct Address {
    #[serde(rename = "freeformAddress")]
    freeform: Option<String>,
}

/// Malformed coordinates read as absent, so that only the result itself gets skipped.
#[serde_as]
#[derive(Deserialize)]
struct Position {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    lat: Option<f64>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    lon: Option<f64>,
}

impl Position {
    fn coordinates(self) -> Option<Coordinates> {
        Some(Coordinates::new(self.lat?, self.lon?))
    }
}

#[derive(Deserialize)]
struct ChargingPark {
    #[serde(default)]
    connectors: Vec<Connector>,
}

#[derive(Deserialize)]
struct Connector {
    #[serde(rename = "ratedPowerKW")]
    rated_power_kw: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_stations_ok() -> Result {
        // language=json
        let body = r#"{
            "summary": {"queryType": "NEARBY", "numResults": 4},
            "results": [
                {
                    "type": "POI",
                    "id": "IN/POI/p0/1",
                    "score": 2.57,
                    "dist": 812.4,
                    "poi": {
                        "name": "Tata Power EZ Charge",
                        "brands": [{"name": "Tata Power"}, {"name": "EZ Charge"}],
                        "categorySet": [{"id": 7309}],
                        "categories": ["electric vehicle station", "fast charger", "public", "24x7"]
                    },
                    "address": {"freeformAddress": "MG Road, Bengaluru 560001, Karnataka"},
                    "position": {"lat": 12.9751, "lon": 77.6063},
                    "chargingPark": {
                        "connectors": [
                            {"connectorType": "IEC62196Type2Outlet", "ratedPowerKW": 22.0},
                            {"connectorType": "IEC62196Type2CCS", "ratedPowerKW": 60.0}
                        ]
                    }
                },
                {
                    "type": "POI",
                    "poi": {"categories": []},
                    "position": {"lat": 12.93, "lon": 77.62}
                },
                {
                    "type": "POI",
                    "id": "IN/POI/p0/3",
                    "poi": {"name": "Nowhere"}
                },
                {
                    "type": "POI",
                    "id": "IN/POI/p0/4",
                    "poi": {"name": "Broken"},
                    "position": {"lat": 190.0, "lon": 77.62}
                }
            ]
        }"#;
        let stations = serde_json::from_str::<SearchResponse>(body)?.into_stations();
        assert_eq!(stations.len(), 2);

        let station = &stations[0];
        assert_eq!(station.id, "tomtom-IN/POI/p0/1");
        assert_eq!(station.name, "Tata Power EZ Charge");
        assert_eq!(station.address.as_deref(), Some("MG Road, Bengaluru 560001, Karnataka"));
        assert_eq!(station.provider.as_deref(), Some("Tata Power"));
        assert_eq!(station.connectors, ["electric vehicle station", "fast charger", "public"]);
        assert_eq!(station.power, Kilowatts(60.0));
        assert_eq!(station.source, Source::RemoteProvider);

        let station = &stations[1];
        assert_eq!(station.id, "tomtom-1");
        assert_eq!(station.name, DEFAULT_NAME);
        assert_eq!(station.address, None);
        assert_eq!(station.provider, None);
        assert!(!station.power.is_known());
        Ok(())
    }

    #[test]
    fn test_malformed_result_is_skipped_alone() -> Result {
        // language=json
        let body = r#"{
            "results": [
                {
                    "id": "IN/POI/p0/5",
                    "poi": {"name": "Statiq Hub", "brands": [{}, {"name": "Statiq"}]},
                    "position": {"lat": 28.6139, "lon": 77.2090}
                },
                {
                    "id": "IN/POI/p0/6",
                    "poi": {"name": "Garbled"},
                    "position": {"lat": "north", "lon": 77.2090}
                }
            ]
        }"#;
        let stations = serde_json::from_str::<SearchResponse>(body)?.into_stations();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "tomtom-IN/POI/p0/5");
        assert_eq!(stations[0].provider.as_deref(), Some("Statiq"));
        Ok(())
    }

    #[test]
    fn test_empty_response_ok() -> Result {
        let stations = serde_json::from_str::<SearchResponse>("{}")?.into_stations();
        assert!(stations.is_empty());
        Ok(())
    }
}
