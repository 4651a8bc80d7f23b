//! Settings store: the single owner and writer of the persisted configuration.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tenki_weather::{GridPoint, HttpConfig, ProviderKind, ProviderSelection, WeatherSettings};

use crate::config::Config;
use crate::error::{AppError, ConfigError};

/// Loaded configuration plus the file it persists to.
///
/// Every mutation is written to disk before it becomes visible to readers.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    config: RwLock<Config>,
}

impl SettingsStore {
    /// Load and validate the configuration at `path`, creating it if missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config =
            Config::load_from(&path).map_err(|e| ConfigError::ParseError(format!("{e:#}")))?;

        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::debug!("Settings loaded from {}", path.display());
        Ok(Self {
            path,
            config: RwLock::new(config),
        })
    }

    /// Open the configuration in the user's config directory.
    pub fn open_default() -> Result<Self, ConfigError> {
        let path = Config::config_path().map_err(|e| ConfigError::NotFound(format!("{e:#}")))?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the weather settings.
    pub fn weather(&self) -> WeatherSettings {
        self.config.read().weather.clone()
    }

    pub fn http(&self) -> HttpConfig {
        self.config.read().http.clone()
    }

    /// The active provider and its location.
    pub fn selection(&self) -> ProviderSelection {
        self.config.read().weather.selection()
    }

    /// Make `selection` active and persist it.
    pub fn select(&self, selection: ProviderSelection) -> Result<(), ConfigError> {
        self.update(|config| config.weather.select(selection))?;
        tracing::info!("Selected {:?}", selection);
        Ok(())
    }

    /// Switch provider, keeping each provider's stored location.
    pub fn select_provider(&self, kind: ProviderKind) -> Result<(), ConfigError> {
        self.update(|config| config.weather.provider = kind)
    }

    /// Select a catalog location for `kind` by its raw id.
    pub fn select_location(&self, kind: ProviderKind, id: &str) -> Result<(), AppError> {
        let selection = ProviderSelection::from_catalog_id(kind, id)?;
        self.select(selection)?;
        Ok(())
    }

    /// Point the Open-Meteo grid at new coordinates and make it active.
    pub fn set_grid_point(&self, latitude: f64, longitude: f64) -> Result<(), AppError> {
        let point = GridPoint::new(latitude, longitude)?;
        self.select(ProviderSelection::GenericGrid(point))?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Config)) -> Result<(), ConfigError> {
        let mut current = self.config.write();
        let mut next = current.clone();
        apply(&mut next);

        next.save_to(&self.path)
            .map_err(|e| ConfigError::WriteFailed(format!("{e:#}")))?;
        *current = next;
        Ok(())
    }
}
