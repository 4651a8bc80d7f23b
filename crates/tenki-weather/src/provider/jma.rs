//! Japan Meteorological Agency ("bosai") forecast client.
//!
//! The forecast endpoint returns an array of reports. The first report is the
//! short-range forecast; its third time series holds per-city temperatures
//! where `temps[0]` is today's low and `temps[1]` today's high. The layout is
//! undocumented, so every step is checked and a mismatch is a `Parse` error.

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::{get_json, parse_celsius, parse_endpoint, ForecastProvider};
use crate::error::WeatherError;
use crate::selection::OfficeId;
use crate::settings::JmaConfig;
use crate::types::ForecastResult;

const TEMPERATURE_SERIES: usize = 2;
const LOW: usize = 0;
const HIGH: usize = 1;

#[derive(Debug, Deserialize)]
struct JmaReport {
    #[serde(rename = "timeSeries", default)]
    time_series: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TemperatureSeries {
    areas: Vec<TemperatureArea>,
}

#[derive(Debug, Deserialize)]
struct TemperatureArea {
    area: AreaName,
    temps: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AreaName {
    name: String,
}

impl JmaReport {
    fn temperature_series(&self) -> Result<TemperatureSeries, WeatherError> {
        let block = self.time_series.get(TEMPERATURE_SERIES).ok_or_else(|| {
            WeatherError::parse(format!(
                "timeSeries[{TEMPERATURE_SERIES}] is missing ({} blocks)",
                self.time_series.len()
            ))
        })?;
        TemperatureSeries::deserialize(block).map_err(|e| {
            WeatherError::parse(format!("timeSeries[{TEMPERATURE_SERIES}] is malformed: {e}"))
        })
    }
}

impl TemperatureSeries {
    fn first_area(&self) -> Result<&TemperatureArea, WeatherError> {
        self.areas
            .first()
            .ok_or_else(|| WeatherError::parse(format!("timeSeries[{TEMPERATURE_SERIES}].areas is empty")))
    }
}

impl TemperatureArea {
    fn temp(&self, index: usize) -> Result<Option<f64>, WeatherError> {
        let field = format!("timeSeries[{TEMPERATURE_SERIES}].areas[0].temps[{index}]");
        let text = self
            .temps
            .get(index)
            .ok_or_else(|| WeatherError::parse(format!("{field} is missing")))?;
        parse_celsius(Some(text), &field)
    }

    /// Today's `(low, high)`.
    ///
    /// Once the morning minimum has passed, JMA repeats the high in the low
    /// slot, so equal values are normal. A low above the high means the
    /// layout changed.
    fn low_high(&self) -> Result<(Option<f64>, Option<f64>), WeatherError> {
        let low = self.temp(LOW)?;
        let high = self.temp(HIGH)?;
        if let (Some(l), Some(h)) = (low, high) {
            if l > h {
                return Err(WeatherError::parse(format!(
                    "temps out of order: low {l} above high {h}"
                )));
            }
        }
        Ok((low, high))
    }
}

fn into_forecast(reports: &[JmaReport]) -> Result<ForecastResult, WeatherError> {
    let report = reports
        .first()
        .ok_or_else(|| WeatherError::parse("response contains no reports"))?;
    let series = report.temperature_series()?;
    let area = series.first_area()?;
    let (low, high) = area.low_high()?;

    let mut result = ForecastResult::new(area.area.name.as_str());
    result.min_temperature_celsius = low;
    result.max_temperature_celsius = high;
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct JmaClient {
    http: Client,
    base_url: Url,
}

impl JmaClient {
    pub fn new(http: Client, config: &JmaConfig) -> Result<Self, WeatherError> {
        Ok(Self {
            http,
            base_url: parse_endpoint(&config.base_url)?,
        })
    }
}

impl ForecastProvider for JmaClient {
    type Selector = OfficeId;

    fn build_request_url(&self, office: &OfficeId) -> Url {
        let mut url = self.base_url.clone();
        // parse_endpoint rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&format!("{}.json", office.as_str()));
        }
        url
    }

    #[instrument(skip(self, office), fields(office = office.as_str()), level = "info")]
    async fn fetch_forecast(&self, office: &OfficeId) -> Result<ForecastResult, WeatherError> {
        let url = self.build_request_url(office);
        tracing::debug!("Requesting {}", url);

        let reports: Vec<JmaReport> = get_json(&self.http, url, "jma").await?;
        into_forecast(&reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(third: serde_json::Value) -> Vec<JmaReport> {
        let json = serde_json::json!([
            {
                "publishingOffice": "気象庁",
                "reportDatetime": "2024-05-01T11:00:00+09:00",
                "timeSeries": [
                    { "timeDefines": [], "areas": [{ "area": { "name": "東京地方", "code": "130010" }, "weathers": ["晴れ"] }] },
                    { "timeDefines": [], "areas": [{ "area": { "name": "東京地方", "code": "130010" }, "pops": ["0"] }] },
                    third
                ]
            },
            { "publishingOffice": "気象庁", "timeSeries": [] }
        ]);
        serde_json::from_value(json).unwrap()
    }

    fn temps(low: &str, high: &str) -> serde_json::Value {
        serde_json::json!({
            "timeDefines": ["2024-05-01T09:00:00+09:00", "2024-05-01T00:00:00+09:00"],
            "areas": [
                { "area": { "name": "東京", "code": "44132" }, "temps": [low, high] },
                { "area": { "name": "大島", "code": "44172" }, "temps": ["15", "22"] }
            ]
        })
    }

    #[test]
    fn test_request_url() {
        let client = JmaClient::new(Client::new(), &JmaConfig::default()).unwrap();
        let url = client.build_request_url(&OfficeId::parse("130000").unwrap());
        assert_eq!(
            url.as_str(),
            "https://www.jma.go.jp/bosai/forecast/data/forecast/130000.json"
        );
    }

    #[test]
    fn test_request_url_with_trailing_slash() {
        let config = JmaConfig {
            base_url: "http://localhost:8080/forecast/".to_string(),
            ..JmaConfig::default()
        };
        let client = JmaClient::new(Client::new(), &config).unwrap();
        let url = client.build_request_url(&OfficeId::parse("016000").unwrap());
        assert_eq!(url.as_str(), "http://localhost:8080/forecast/016000.json");
    }

    #[test]
    fn test_low_is_first_high_is_second() {
        let result = into_forecast(&report(temps("10", "20"))).unwrap();
        assert_eq!(result.location_name, "東京");
        assert_eq!(result.min_temperature_celsius, Some(10.0));
        assert_eq!(result.max_temperature_celsius, Some(20.0));
    }

    #[test]
    fn test_swapped_temps_are_rejected() {
        let err = into_forecast(&report(temps("20", "10"))).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("out of order")));
    }

    #[test]
    fn test_repeated_high_in_low_slot_is_accepted() {
        let result = into_forecast(&report(temps("21", "21"))).unwrap();
        assert_eq!(result.min_temperature_celsius, Some(21.0));
        assert_eq!(result.max_temperature_celsius, Some(21.0));
    }

    #[test]
    fn test_empty_temp_is_absent() {
        let result = into_forecast(&report(temps("", "18"))).unwrap();
        assert_eq!(result.min_temperature_celsius, None);
        assert_eq!(result.max_temperature_celsius, Some(18.0));
    }

    #[test]
    fn test_missing_third_series_is_parse_error() {
        let json = serde_json::json!([{ "timeSeries": [{ "areas": [] }, { "areas": [] }] }]);
        let reports: Vec<JmaReport> = serde_json::from_value(json).unwrap();
        let err = into_forecast(&reports).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("timeSeries[2]")));
    }

    #[test]
    fn test_third_series_without_temps_is_parse_error() {
        let third = serde_json::json!({
            "areas": [{ "area": { "name": "東京", "code": "44132" }, "pops": ["10"] }]
        });
        assert!(matches!(
            into_forecast(&report(third)),
            Err(WeatherError::Parse(_))
        ));
    }

    #[test]
    fn test_single_temp_is_parse_error() {
        let third = serde_json::json!({
            "areas": [{ "area": { "name": "東京", "code": "44132" }, "temps": ["10"] }]
        });
        let err = into_forecast(&report(third)).unwrap_err();
        assert!(matches!(err, WeatherError::Parse(ref m) if m.contains("temps[1]")));
    }

    #[test]
    fn test_no_reports_is_parse_error() {
        assert!(matches!(into_forecast(&[]), Err(WeatherError::Parse(_))));
    }
}
