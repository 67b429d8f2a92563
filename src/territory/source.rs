// src/territory/source.rs

use crate::math::{
    error::{TerritoryError, TerritoryResult},
    types::*,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Geometrie und Stammdaten eines Landes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryGeometry {
    /// ISO 3166-1 alpha-3; `-99` oder leer, wenn unbekannt
    #[serde(default)]
    pub iso_code: String,
    pub name: String,
    /// Übersetzte Namen nach Sprachcode (`"de"`, `"fr"`, ...)
    #[serde(default)]
    pub localized_names: BTreeMap<String, String>,
    pub geometry: Geometry<f64>,
}

impl CountryGeometry {
    pub fn new(
        iso_code: impl Into<String>,
        name: impl Into<String>,
        geometry: Geometry<f64>,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            localized_names: BTreeMap::new(),
            geometry,
        }
    }

    /// Land aus einzelnen Polygonen, als MultiPolygon zusammengefasst
    pub fn from_polygons(
        iso_code: impl Into<String>,
        name: impl Into<String>,
        polygons: Vec<Polygon<f64>>,
    ) -> Self {
        Self::new(
            iso_code,
            name,
            Geometry::MultiPolygon(MultiPolygon::new(polygons)),
        )
    }

    pub fn with_localized_name(
        mut self,
        language: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.localized_names.insert(language.into(), name.into());
        self
    }

    /// Name in der gewünschten Sprache, sonst der Standardname
    pub fn display_name(&self, language: &str) -> &str {
        self.localized_names
            .get(language)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Liefert Ländergeometrien nach Namen
pub trait GeometrySource {
    fn fetch(&self, country: &str) -> TerritoryResult<CountryGeometry>;
}

/// Geometrie-Quelle im Speicher, adressierbar über Namen oder ISO-Code
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    countries: Vec<CountryGeometry>,
    by_name: HashMap<String, usize>,
    by_iso: HashMap<String, usize>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Land hinzu; ein vorhandener Eintrag gleichen Namens wird ersetzt
    pub fn insert(&mut self, country: CountryGeometry) {
        let index = match self.by_name.get(&country.name) {
            Some(&index) => {
                self.countries[index] = country;
                index
            }
            None => {
                self.countries.push(country);
                self.countries.len() - 1
            }
        };

        let country = &self.countries[index];
        self.by_name.insert(country.name.clone(), index);
        if !country.iso_code.is_empty() && country.iso_code != "-99" {
            self.by_iso
                .insert(country.iso_code.to_ascii_uppercase(), index);
        }
    }

    /// Lädt ein JSON-Array von `CountryGeometry`
    pub fn from_json_str(json: &str) -> TerritoryResult<Self> {
        let countries: Vec<CountryGeometry> = serde_json::from_str(json)?;
        let source: Self = countries.into_iter().collect();
        debug!(countries = source.len(), "loaded in-memory geometry source");
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }
}

impl FromIterator<CountryGeometry> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = CountryGeometry>>(iter: I) -> Self {
        let mut source = Self::new();
        for country in iter {
            source.insert(country);
        }
        source
    }
}

impl GeometrySource for InMemorySource {
    fn fetch(&self, country: &str) -> TerritoryResult<CountryGeometry> {
        self.by_name
            .get(country)
            .or_else(|| self.by_iso.get(&country.to_ascii_uppercase()))
            .map(|&index| self.countries[index].clone())
            .ok_or_else(|| TerritoryError::CountryNotFound {
                name: country.to_string(),
            })
    }
}
