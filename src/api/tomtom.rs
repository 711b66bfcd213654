mod models;

use std::time::Duration;

use bon::Builder;
use reqwest::Client;

use self::models::SearchResponse;
use crate::{
    core::station::{Coordinates, Station},
    prelude::*,
};

const CATEGORY_SEARCH_URL: &str =
    "https://api.tomtom.com/search/2/categorySearch/electric%20vehicle%20station.json";

/// TomTom category search for EV charging stations.
pub struct Api {
    client: Client,
    api_key: String,
}

#[must_use]
#[derive(Copy, Clone, Builder)]
pub struct SearchQuery {
    pub centre: Coordinates,

    #[builder(default = 15_000)]
    pub radius_meters: u32,

    /// Maximum number of results.
    #[builder(default = 50)]
    pub limit: u32,
}

impl Api {
    pub fn new(api_key: String) -> Result<Self> {
        ensure!(!api_key.trim().is_empty(), "the TomTom API key is empty");
        let client = Client::builder()
            .user_agent(concat!("ev-helper/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Search and normalize the results, dropping those without valid coordinates.
    #[instrument(
        skip_all,
        fields(
            latitude = query.centre.latitude,
            longitude = query.centre.longitude,
            radius_meters = query.radius_meters
        )
    )]
    pub async fn search_charging_stations(&self, query: SearchQuery) -> Result<Vec<Station>> {
        info!(limit = query.limit, "searching…");

        // The URL contains the key, hence `without_url()`.
        let response = self
            .client
            .get(CATEGORY_SEARCH_URL)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("lat", query.centre.latitude), ("lon", query.centre.longitude)])
            .query(&[("radius", query.radius_meters), ("limit", query.limit)])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("failed to call the TomTom search API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("the TomTom search API returned `{status}`: {body}");
        }

        let stations = response
            .json::<SearchResponse>()
            .await
            .map_err(reqwest::Error::without_url)
            .context("failed to deserialize the TomTom search response")?
            .into_stations();
        info!(n_stations = stations.len(), "found");
        Ok(stations)
    }
}
