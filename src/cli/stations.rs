use std::path::PathBuf;

use clap::Parser;

use crate::{
    api::tomtom::{self, SearchQuery},
    core::{
        dedupe::merge_stations,
        station::{Coordinates, Station},
    },
    data::{cities::City, stations},
    prelude::*,
    tables::build_stations_table,
};

#[derive(Parser)]
pub struct StationsArgs {
    /// Static station catalog, a JSON array of station records.
    #[clap(long = "local-stations", env = "LOCAL_STATIONS_PATH", default_value = "data/stations.json")]
    local_stations_path: PathBuf,

    /// Search around the city centre.
    #[clap(long, env = "CITY", value_parser = City::parse, default_value_t = City::FALLBACK)]
    city: City,

    /// Search centre latitude, overrides the city.
    #[clap(long, requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Search centre longitude, overrides the city.
    #[clap(long, requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,

    #[clap(long, env = "SEARCH_RADIUS_METERS", default_value = "15000")]
    radius_meters: u32,

    /// Maximum number of the remote results.
    #[clap(long, env = "SEARCH_LIMIT", default_value = "50")]
    limit: u32,

    /// Without the key, only the local catalog is listed.
    #[clap(long, env = "TOMTOM_API_KEY", hide_env_values = true)]
    tomtom_api_key: Option<String>,

    /// Print JSON instead of the table.
    #[clap(long)]
    json: bool,
}

impl StationsArgs {
    fn centre(&self) -> Coordinates {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinates::new(latitude, longitude),
            _ => self.city.centre(),
        }
    }

    #[instrument(skip_all, fields(city = %self.city))]
    pub async fn run(self) -> Result {
        let centre = self.centre();
        ensure!(centre.is_valid(), "invalid search centre: {centre:?}");

        let local = stations::load(&self.local_stations_path)?;
        let remote = self.search_remote(centre).await;
        let stations = merge_stations(local, remote);
        info!(n_stations = stations.len(), "merged");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stations)?);
        } else {
            println!("{}", build_stations_table(&stations));
        }
        Ok(())
    }

    /// Remote failures are not fatal: the local catalog is still listed.
    async fn search_remote(&self, centre: Coordinates) -> Vec<Station> {
        let Some(api_key) = self.tomtom_api_key.clone() else {
            warn!("the TomTom API key is not set, listing the local stations only");
            return Vec::new();
        };
        let query = SearchQuery::builder()
            .centre(centre)
            .radius_meters(self.radius_meters)
            .limit(self.limit)
            .build();
        match search(api_key, query).await {
            Ok(stations) => stations,
            Err(error) => {
                warn!("the remote search failed, listing the local stations only: {error:#}");
                Vec::new()
            }
        }
    }
}

async fn search(api_key: String, query: SearchQuery) -> Result<Vec<Station>> {
    tomtom::Api::new(api_key)?.search_charging_stations(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_defaults_to_city() -> Result {
        let args = StationsArgs::try_parse_from(["stations", "--city", "mumbai"])?;
        assert_eq!(args.centre(), City::Mumbai.centre());
        Ok(())
    }

    #[test]
    fn test_centre_override() -> Result {
        let args =
            StationsArgs::try_parse_from(["stations", "--latitude", "-1.5", "--longitude", "36.8"])?;
        assert_eq!(args.centre(), Coordinates::new(-1.5, 36.8));
        Ok(())
    }

    #[test]
    fn test_latitude_requires_longitude() {
        assert!(StationsArgs::try_parse_from(["stations", "--latitude", "12.9"]).is_err());
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() -> Result {
        let mut args = StationsArgs::try_parse_from(["stations"])?;
        args.tomtom_api_key = None;
        assert!(args.search_remote(args.centre()).await.is_empty());
        Ok(())
    }
}
