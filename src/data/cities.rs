use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{core::station::Coordinates, prelude::*};

/// Cities that have a dedicated station page.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum City {
    Bengaluru,
    Mumbai,
    Delhi,
    Chennai,
    Hyderabad,
    Kolkata,
    Pune,
    Ahmedabad,
}

impl City {
    pub const ALL: [Self; 8] = [
        Self::Bengaluru,
        Self::Mumbai,
        Self::Delhi,
        Self::Chennai,
        Self::Hyderabad,
        Self::Kolkata,
        Self::Pune,
        Self::Ahmedabad,
    ];

    /// Map centre when nothing better is known.
    pub const FALLBACK: Self = Self::Bengaluru;

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bengaluru => "Bengaluru",
            Self::Mumbai => "Mumbai",
            Self::Delhi => "Delhi",
            Self::Chennai => "Chennai",
            Self::Hyderabad => "Hyderabad",
            Self::Kolkata => "Kolkata",
            Self::Pune => "Pune",
            Self::Ahmedabad => "Ahmedabad",
        }
    }

    #[must_use]
    pub fn slug(self) -> String {
        self.name().to_lowercase()
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|city| city.name().eq_ignore_ascii_case(slug.trim()))
    }

    /// Parse the command-line value.
    pub fn parse(slug: &str) -> Result<Self> {
        Self::from_slug(slug).with_context(|| {
            format!(
                "unknown city `{slug}`, expected one of: {}",
                Self::ALL.into_iter().map(Self::slug).join(", ")
            )
        })
    }

    #[must_use]
    pub const fn centre(self) -> Coordinates {
        match self {
            Self::Bengaluru => Coordinates::new(12.9716, 77.5946),
            Self::Mumbai => Coordinates::new(19.0760, 72.8777),
            Self::Delhi => Coordinates::new(28.6139, 77.2090),
            Self::Chennai => Coordinates::new(13.0827, 80.2707),
            Self::Hyderabad => Coordinates::new(17.3850, 78.4867),
            Self::Kolkata => Coordinates::new(22.5726, 88.3639),
            Self::Pune => Coordinates::new(18.5204, 73.8567),
            Self::Ahmedabad => Coordinates::new(23.0225, 72.5714),
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slug() {
        assert_eq!(City::from_slug("bengaluru"), Some(City::Bengaluru));
        assert_eq!(City::from_slug("AHMEDABAD"), Some(City::Ahmedabad));
        assert_eq!(City::from_slug("bangalore"), None);
    }

    #[test]
    fn test_parse_unknown() {
        let error = City::parse("atlantis").unwrap_err().to_string();
        assert!(error.contains("bengaluru, mumbai"), "{error}");
    }

    #[test]
    fn test_slug_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_slug(&city.slug()), Some(city));
        }
    }

    #[test]
    fn test_centres_are_valid() {
        assert!(City::ALL.into_iter().all(|city| city.centre().is_valid()));
    }
}
