//! Provider selection with location selectors validated against the catalogs.
//!
//! `CityId` and `OfficeId` can only hold ids present in their catalog, so a
//! selection can never pair a provider with another provider's identifier.

use serde::{Deserialize, Serialize};

use crate::catalog::{cities, jma_areas, Area, City, CITIES, OFFICES};
use crate::error::WeatherError;
use crate::types::{GridPoint, ProviderKind};

/// A city in the tsukumijima catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityId(&'static City);

impl CityId {
    pub fn parse(id: &str) -> Result<Self, WeatherError> {
        CITIES.lookup(id).map(Self)
    }

    pub fn as_str(&self) -> &'static str {
        self.0.code
    }

    pub fn city(&self) -> &'static City {
        self.0
    }
}

impl Default for CityId {
    fn default() -> Self {
        Self(&cities::TOKYO)
    }
}

impl TryFrom<String> for CityId {
    type Error = WeatherError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::parse(&id)
    }
}

impl From<CityId> for String {
    fn from(id: CityId) -> Self {
        id.as_str().to_string()
    }
}

/// A forecast office in the JMA catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OfficeId(&'static Area);

impl OfficeId {
    pub fn parse(id: &str) -> Result<Self, WeatherError> {
        OFFICES.lookup(id).map(Self)
    }

    pub fn as_str(&self) -> &'static str {
        self.0.code
    }

    pub fn area(&self) -> &'static Area {
        self.0
    }

    /// Regional center this office reports under.
    pub fn center(&self) -> Result<&'static Area, WeatherError> {
        jma_areas::center_of(self.0)
    }
}

impl Default for OfficeId {
    fn default() -> Self {
        Self(&jma_areas::TOKYO)
    }
}

impl TryFrom<String> for OfficeId {
    type Error = WeatherError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::parse(&id)
    }
}

impl From<OfficeId> for String {
    fn from(id: OfficeId) -> Self {
        id.as_str().to_string()
    }
}

/// The active provider together with its location selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProviderSelection {
    GenericGrid(GridPoint),
    CommunityJapan(CityId),
    NationalAgencyJapan(OfficeId),
}

impl ProviderSelection {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::GenericGrid(_) => ProviderKind::GenericGrid,
            Self::CommunityJapan(_) => ProviderKind::CommunityJapan,
            Self::NationalAgencyJapan(_) => ProviderKind::NationalAgencyJapan,
        }
    }

    /// Select a provider from a raw location id, rejecting ids that are not
    /// in that provider's catalog.
    pub fn from_catalog_id(kind: ProviderKind, id: &str) -> Result<Self, WeatherError> {
        match kind {
            ProviderKind::CommunityJapan => CityId::parse(id).map(Self::CommunityJapan),
            ProviderKind::NationalAgencyJapan => OfficeId::parse(id).map(Self::NationalAgencyJapan),
            ProviderKind::GenericGrid => Err(WeatherError::not_found("catalog", "open_meteo")),
        }
    }
}
