//! Per-provider configuration and the settings aggregate the clients read.

use serde::{Deserialize, Serialize};

use crate::selection::{CityId, OfficeId, ProviderSelection};
use crate::types::{GridPoint, ProviderKind};

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const TSUKUMIJIMA_URL: &str = "https://weather.tsukumijima.net/api/forecast";
pub const JMA_FORECAST_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast";

pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";
pub const DEFAULT_GRID_LABEL: &str = "今日";
pub const DEFAULT_USER_AGENT: &str = concat!("tenki/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Subject of the report sentence, e.g. "今日"
    #[serde(default = "default_grid_label")]
    pub label: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_open_meteo_url")]
    pub base_url: String,

    #[serde(default)]
    pub location: GridPoint,
}

fn default_grid_label() -> String {
    DEFAULT_GRID_LABEL.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_open_meteo_url() -> String {
    OPEN_METEO_URL.to_string()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            label: default_grid_label(),
            timezone: default_timezone(),
            base_url: default_open_meteo_url(),
            location: GridPoint::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsukumijimaConfig {
    #[serde(default)]
    pub city: CityId,

    #[serde(default = "default_tsukumijima_url")]
    pub base_url: String,
}

fn default_tsukumijima_url() -> String {
    TSUKUMIJIMA_URL.to_string()
}

impl Default for TsukumijimaConfig {
    fn default() -> Self {
        Self {
            city: CityId::default(),
            base_url: default_tsukumijima_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JmaConfig {
    #[serde(default)]
    pub office: OfficeId,

    #[serde(default = "default_jma_url")]
    pub base_url: String,
}

fn default_jma_url() -> String {
    JMA_FORECAST_URL.to_string()
}

impl Default for JmaConfig {
    fn default() -> Self {
        Self {
            office: OfficeId::default(),
            base_url: default_jma_url(),
        }
    }
}

/// HTTP client settings shared by all providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout; unset means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Selected provider plus the configuration of every provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSettings {
    #[serde(default)]
    pub provider: ProviderKind,

    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,

    #[serde(default)]
    pub tsukumijima: TsukumijimaConfig,

    #[serde(default)]
    pub jma: JmaConfig,
}

impl WeatherSettings {
    /// The active provider and its location selector.
    pub fn selection(&self) -> ProviderSelection {
        match self.provider {
            ProviderKind::GenericGrid => ProviderSelection::GenericGrid(self.open_meteo.location),
            ProviderKind::CommunityJapan => ProviderSelection::CommunityJapan(self.tsukumijima.city),
            ProviderKind::NationalAgencyJapan => {
                ProviderSelection::NationalAgencyJapan(self.jma.office)
            }
        }
    }

    /// Make `selection` the active provider and store its location.
    pub fn select(&mut self, selection: ProviderSelection) {
        self.provider = selection.kind();
        match selection {
            ProviderSelection::GenericGrid(point) => self.open_meteo.location = point,
            ProviderSelection::CommunityJapan(city) => self.tsukumijima.city = city,
            ProviderSelection::NationalAgencyJapan(office) => self.jma.office = office,
        }
    }
}
