//! weather.tsukumijima.net forecast client (livedoor-compatible JSON).

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use super::{get_json, parse_celsius, parse_endpoint, ForecastProvider};
use crate::error::WeatherError;
use crate::selection::CityId;
use crate::settings::TsukumijimaConfig;
use crate::types::ForecastResult;

#[derive(Debug, Deserialize)]
struct TsukumijimaResponse {
    forecasts: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize)]
struct DailyForecast {
    temperature: Temperature,
}

#[derive(Debug, Deserialize)]
struct Temperature {
    max: Reading,
    min: Reading,
}

#[derive(Debug, Deserialize)]
struct Reading {
    celsius: Option<String>,
}

impl TsukumijimaResponse {
    /// Only the first forecast day is read.
    fn today(&self) -> Result<&DailyForecast, WeatherError> {
        self.forecasts
            .first()
            .ok_or_else(|| WeatherError::parse("forecasts is empty"))
    }

    fn into_forecast(self, city: CityId) -> Result<ForecastResult, WeatherError> {
        let today = self.today()?;
        let mut result = ForecastResult::new(city.city().name);
        result.max_temperature_celsius = parse_celsius(
            today.temperature.max.celsius.as_deref(),
            "forecasts[0].temperature.max.celsius",
        )?;
        result.min_temperature_celsius = parse_celsius(
            today.temperature.min.celsius.as_deref(),
            "forecasts[0].temperature.min.celsius",
        )?;
        Ok(result)
    }
}

#[derive(Debug, Clone)]
pub struct TsukumijimaClient {
    http: Client,
    base_url: Url,
}

impl TsukumijimaClient {
    pub fn new(http: Client, config: &TsukumijimaConfig) -> Result<Self, WeatherError> {
        Ok(Self {
            http,
            base_url: parse_endpoint(&config.base_url)?,
        })
    }
}

impl ForecastProvider for TsukumijimaClient {
    type Selector = CityId;

    fn build_request_url(&self, city: &CityId) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("city", city.as_str());
        url
    }

    #[instrument(skip(self, city), fields(city = city.as_str()), level = "info")]
    async fn fetch_forecast(&self, city: &CityId) -> Result<ForecastResult, WeatherError> {
        let url = self.build_request_url(city);
        tracing::debug!("Requesting {}", url);

        let body: TsukumijimaResponse = get_json(&self.http, url, "tsukumijima").await?;
        body.into_forecast(*city)
    }
}
