//! Weather lookup for Tenki
//!
//! Maps a selected provider (Open-Meteo, tsukumijima, JMA) and location to a
//! one-sentence Japanese report of today's weather and temperatures.

pub mod catalog;
pub mod error;
pub mod provider;
pub mod report;
pub mod selection;
pub mod service;
pub mod settings;
pub mod types;
pub mod wmo;

pub use catalog::{center_of, Catalog, CatalogEntry, CENTERS, CITIES, OFFICES};
pub use error::WeatherError;
pub use provider::{ForecastProvider, JmaClient, OpenMeteoClient, TsukumijimaClient};
pub use report::format_report;
pub use selection::{CityId, OfficeId, ProviderSelection};
pub use service::WeatherReporter;
pub use settings::{HttpConfig, JmaConfig, OpenMeteoConfig, TsukumijimaConfig, WeatherSettings};
pub use types::{ForecastResult, GridPoint, ProviderKind};
