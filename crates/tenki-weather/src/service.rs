//! "Produce today's weather sentence for the active selection."

use tracing::instrument;

use crate::error::WeatherError;
use crate::provider::{http_client, ForecastProvider, JmaClient, OpenMeteoClient, TsukumijimaClient};
use crate::report::format_report;
use crate::selection::ProviderSelection;
use crate::settings::{HttpConfig, WeatherSettings};
use crate::types::ForecastResult;

/// Owns one client per provider and dispatches on the selection.
#[derive(Debug, Clone)]
pub struct WeatherReporter {
    open_meteo: OpenMeteoClient,
    tsukumijima: TsukumijimaClient,
    jma: JmaClient,
}

impl WeatherReporter {
    pub fn new(settings: &WeatherSettings, http: &HttpConfig) -> Result<Self, WeatherError> {
        let client = http_client(http)?;
        Ok(Self {
            open_meteo: OpenMeteoClient::new(client.clone(), &settings.open_meteo)?,
            tsukumijima: TsukumijimaClient::new(client.clone(), &settings.tsukumijima)?,
            jma: JmaClient::new(client, &settings.jma)?,
        })
    }

    /// Fetch and normalize the forecast for `selection`.
    pub async fn forecast(&self, selection: &ProviderSelection) -> Result<ForecastResult, WeatherError> {
        match selection {
            ProviderSelection::GenericGrid(point) => self.open_meteo.fetch_forecast(point).await,
            ProviderSelection::CommunityJapan(city) => self.tsukumijima.fetch_forecast(city).await,
            ProviderSelection::NationalAgencyJapan(office) => {
                self.jma.fetch_forecast(office).await
            }
        }
    }

    /// Sentence for an explicit selection.
    #[instrument(skip(self), level = "info")]
    pub async fn report_for(&self, selection: &ProviderSelection) -> Result<String, WeatherError> {
        let result = self
            .forecast(selection)
            .await
            .inspect_err(|e| tracing::warn!("Weather lookup via {:?} failed: {}", selection.kind(), e))?;
        let sentence = format_report(&result, &result.location_name);
        tracing::info!("Weather report ready for {}", result.location_name);
        Ok(sentence)
    }

    /// Sentence for the provider selected in `settings`.
    pub async fn report(&self, settings: &WeatherSettings) -> Result<String, WeatherError> {
        self.report_for(&settings.selection()).await
    }
}
