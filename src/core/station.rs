use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::power::Kilowatts;

/// Where a station record came from.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// Bundled static station file.
    #[default]
    #[display("local")]
    Local,

    /// Third-party POI search.
    #[display("remote-provider")]
    RemoteProvider,
}

impl Source {
    /// Identifier prefix that keeps identifiers unique across the sources.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::RemoteProvider => "tomtom",
        }
    }

    /// Qualify the source-local identifier, unless it is qualified already.
    #[must_use]
    pub fn qualify(self, id: &str) -> String {
        let prefix = self.id_prefix();
        match id.strip_prefix(prefix) {
            Some(rest) if rest.starts_with('-') => id.to_owned(),
            _ => format!("{prefix}-{id}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Finite and within the WGS-84 bounds.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct Station {
    #[builder(into)]
    pub id: String,

    #[builder(into)]
    pub name: String,

    /// Absent coordinates read as zeros.
    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// At most three are shown.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connectors: Vec<String>,

    /// Zero means unknown.
    #[builder(default)]
    #[serde(default, rename = "power_kw")]
    pub power: Kilowatts,

    #[builder(default)]
    #[serde(default)]
    pub source: Source,
}

impl Station {
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}
