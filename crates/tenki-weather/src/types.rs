use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Weather data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProviderKind {
    /// Open-Meteo global forecast grid
    #[default]
    #[serde(rename = "open_meteo")]
    GenericGrid,
    /// weather.tsukumijima.net community API
    #[serde(rename = "tsukumijima")]
    CommunityJapan,
    /// Japan Meteorological Agency forecast API
    #[serde(rename = "jma")]
    NationalAgencyJapan,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        Self::GenericGrid,
        Self::CommunityJapan,
        Self::NationalAgencyJapan,
    ];

    /// Label shown in a provider dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::GenericGrid => "OpenMeteo API",
            Self::CommunityJapan => "Tsukumijima API",
            Self::NationalAgencyJapan => "気象庁 API",
        }
    }
}

/// Latitude/longitude pair for the Open-Meteo grid.
///
/// Only constructible with in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridPoint")]
pub struct GridPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGridPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGridPoint> for GridPoint {
    type Error = WeatherError;

    fn try_from(raw: RawGridPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GridPoint {
    /// Tokyo, the historical default location.
    pub const TOKYO: GridPoint = GridPoint {
        latitude: 35.689,
        longitude: 139.692,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(WeatherError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for GridPoint {
    fn default() -> Self {
        Self::TOKYO
    }
}

/// Fields extracted from one provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub location_name: String,
    pub weather_description: Option<String>,
    pub max_temperature_celsius: Option<f64>,
    pub min_temperature_celsius: Option<f64>,
}

impl ForecastResult {
    pub fn new(location_name: impl Into<String>) -> Self {
        Self {
            location_name: location_name.into(),
            weather_description: None,
            max_temperature_celsius: None,
            min_temperature_celsius: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_in_range() {
        let p = GridPoint::new(-33.87, 151.21).unwrap();
        assert_eq!(p.latitude(), -33.87);
        assert_eq!(p.longitude(), 151.21);
    }

    #[test]
    fn test_grid_point_rejects_out_of_range() {
        assert!(matches!(
            GridPoint::new(90.5, 0.0),
            Err(WeatherError::InvalidCoordinates { .. })
        ));
        assert!(GridPoint::new(0.0, -180.1).is_err());
        assert!(GridPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_grid_point_deserialize_validates() {
        let ok: GridPoint = serde_json::from_str(r#"{"latitude": 43.06, "longitude": 141.35}"#).unwrap();
        assert_eq!(ok.latitude(), 43.06);

        let bad = serde_json::from_str::<GridPoint>(r#"{"latitude": 200, "longitude": 0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_provider_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&ProviderKind::NationalAgencyJapan).unwrap(),
            "\"jma\""
        );
        let kind: ProviderKind = serde_json::from_str("\"tsukumijima\"").unwrap();
        assert_eq!(kind, ProviderKind::CommunityJapan);
    }
}
