//! Open-Meteo daily forecast client.
//! API: https://open-meteo.com/en/docs (no key required)

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::{get_json, parse_endpoint, ForecastProvider};
use crate::error::WeatherError;
use crate::settings::OpenMeteoConfig;
use crate::types::{ForecastResult, GridPoint};
use crate::wmo;

const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    daily: OpenMeteoDaily,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default, alias = "weather_code")]
    weathercode: Vec<Option<i32>>,
}

impl OpenMeteoDaily {
    /// First element of a daily array; the array itself must not be empty.
    fn today<T: Copy>(values: &[Option<T>], field: &str) -> Result<Option<T>, WeatherError> {
        values
            .first()
            .copied()
            .ok_or_else(|| WeatherError::parse(format!("daily.{field} has no entry for today")))
    }

    fn max_temperature(&self) -> Result<Option<f64>, WeatherError> {
        Self::today(&self.temperature_2m_max, "temperature_2m_max")
    }

    fn min_temperature(&self) -> Result<Option<f64>, WeatherError> {
        Self::today(&self.temperature_2m_min, "temperature_2m_min")
    }

    /// Today's weather code resolved to text. Missing or unknown codes yield `None`.
    fn weather_description(&self) -> Option<String> {
        let code = self.weathercode.first().copied().flatten()?;
        match wmo::describe(code) {
            Ok(text) => Some(text.to_string()),
            Err(e) => {
                tracing::warn!("Ignoring weather code: {}", e);
                None
            }
        }
    }

    fn into_forecast(self, label: &str) -> Result<ForecastResult, WeatherError> {
        let mut result = ForecastResult::new(label);
        result.max_temperature_celsius = self.max_temperature()?;
        result.min_temperature_celsius = self.min_temperature()?;
        result.weather_description = self.weather_description();
        Ok(result)
    }
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: Url,
    timezone: String,
    label: String,
}

impl OpenMeteoClient {
    pub fn new(http: Client, config: &OpenMeteoConfig) -> Result<Self, WeatherError> {
        Ok(Self {
            http,
            base_url: parse_endpoint(&config.base_url)?,
            timezone: config.timezone.clone(),
            label: config.label.clone(),
        })
    }
}

impl ForecastProvider for OpenMeteoClient {
    type Selector = GridPoint;

    fn build_request_url(&self, point: &GridPoint) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &point.latitude().to_string())
            .append_pair("longitude", &point.longitude().to_string())
            .append_pair("daily", DAILY_FIELDS)
            .append_pair("timezone", &self.timezone);
        url
    }

    #[instrument(skip(self), level = "info")]
    async fn fetch_forecast(&self, point: &GridPoint) -> Result<ForecastResult, WeatherError> {
        let url = self.build_request_url(point);
        tracing::debug!("Requesting {}", url);

        let body: OpenMeteoResponse = get_json(&self.http, url, "open-meteo").await?;
        body.daily.into_forecast(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenMeteoClient {
        OpenMeteoClient::new(Client::new(), &OpenMeteoConfig::default()).unwrap()
    }

    fn parse(json: serde_json::Value) -> Result<ForecastResult, WeatherError> {
        let body: OpenMeteoResponse = serde_json::from_value(json).unwrap();
        body.daily.into_forecast("今日")
    }

    #[test]
    fn test_request_url() {
        let url = client().build_request_url(&GridPoint::TOKYO);
        assert!(url
            .as_str()
            .starts_with("https://api.open-meteo.com/v1/forecast?latitude=35.689&longitude=139.692"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("latitude".to_string(), "35.689".to_string()),
                ("longitude".to_string(), "139.692".to_string()),
                ("daily".to_string(), DAILY_FIELDS.to_string()),
                ("timezone".to_string(), "Asia/Tokyo".to_string()),
            ]
        );
    }

    #[test]
    fn test_extracts_first_day() {
        let result = parse(serde_json::json!({
            "daily": {
                "time": ["2024-05-01", "2024-05-02"],
                "weathercode": [1, 61],
                "temperature_2m_max": [25.0, 19.5],
                "temperature_2m_min": [15.0, 12.1]
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            ForecastResult {
                location_name: "今日".to_string(),
                weather_description: Some("Mainly clear".to_string()),
                max_temperature_celsius: Some(25.0),
                min_temperature_celsius: Some(15.0),
            }
        );
    }

    #[test]
    fn test_missing_weathercode_is_not_an_error() {
        let result = parse(serde_json::json!({
            "daily": {
                "temperature_2m_max": [20.3],
                "temperature_2m_min": [11.8]
            }
        }))
        .unwrap();
        assert_eq!(result.weather_description, None);
        assert_eq!(result.max_temperature_celsius, Some(20.3));
    }

    #[test]
    fn test_unknown_weathercode_is_dropped() {
        let result = parse(serde_json::json!({
            "daily": {
                "weathercode": [42],
                "temperature_2m_max": [20.0],
                "temperature_2m_min": [10.0]
            }
        }))
        .unwrap();
        assert_eq!(result.weather_description, None);
    }

    #[test]
    fn test_null_temperature_is_absent() {
        let result = parse(serde_json::json!({
            "daily": {
                "temperature_2m_max": [null],
                "temperature_2m_min": [8.0]
            }
        }))
        .unwrap();
        assert_eq!(result.max_temperature_celsius, None);
        assert_eq!(result.min_temperature_celsius, Some(8.0));
    }

    #[test]
    fn test_empty_daily_array_is_parse_error() {
        let err = parse(serde_json::json!({
            "daily": {
                "temperature_2m_max": [],
                "temperature_2m_min": [8.0]
            }
        }))
        .unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("temperature_2m_max")));
    }
}
