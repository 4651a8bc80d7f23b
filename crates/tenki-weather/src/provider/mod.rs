//! Provider clients for the three weather APIs.

pub mod jma;
pub mod open_meteo;
pub mod tsukumijima;

pub use jma::JmaClient;
pub use open_meteo::OpenMeteoClient;
pub use tsukumijima::TsukumijimaClient;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::WeatherError;
use crate::settings::HttpConfig;
use crate::types::ForecastResult;

/// Capability shared by every provider client.
pub trait ForecastProvider {
    /// Location selector understood by this provider
    type Selector;

    /// Request URL for a selector. Pure, no I/O.
    fn build_request_url(&self, selector: &Self::Selector) -> Url;

    /// Fetch today's forecast. Fails with `Network` or `Parse`; never retries.
    fn fetch_forecast(
        &self,
        selector: &Self::Selector,
    ) -> impl Future<Output = Result<ForecastResult, WeatherError>> + Send;
}

/// Build the HTTP client shared by the provider clients.
pub fn http_client(config: &HttpConfig) -> Result<Client, WeatherError> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(WeatherError::Network)
}

/// Parse a configured endpoint base URL.
pub(crate) fn parse_endpoint(base_url: &str) -> Result<Url, WeatherError> {
    let invalid = |reason: String| WeatherError::InvalidEndpoint {
        url: base_url.to_string(),
        reason,
    };
    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()));
    }
    Ok(url)
}

/// GET `url` and decode the JSON body.
///
/// Transport failures and non-2xx statuses map to `Network`; an undecodable
/// body maps to `Parse`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: Url,
    source: &str,
) -> Result<T, WeatherError> {
    let response = http.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| WeatherError::parse(format!("{source} response: {e}")))
}

/// Read a textual Celsius value. Empty and `null` text mean "not reported".
pub(crate) fn parse_celsius(text: Option<&str>, field: &str) -> Result<Option<f64>, WeatherError> {
    let Some(text) = text.map(str::trim) else {
        return Ok(None);
    };
    if text.is_empty() || text == "null" {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(WeatherError::parse(format!(
            "{field} is not a number: {text:?}"
        ))),
    }
}
