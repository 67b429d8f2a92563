// src/territory/analyzer.rs

use super::area::{Territory, analyze_areas};
use super::bounds::{BoundsRegion, calculate_bounds};
use super::classifier::{Classification, classify};
use super::config::{AnalysisConfig, validate_threshold};
use super::decomposer::Decomposer;
use super::distance::{DistanceAnalyzer, DistanceReport};
use super::framing::frame_view;
use super::neighbors::{NeighborCandidate, filter_relevant_neighbors, tag_named_neighbor};
use super::source::{CountryGeometry, GeometrySource};
use crate::math::{error::TerritoryResult, types::Bounds2D};
use serde::Serialize;
use tracing::debug;

/// Ergebnis einer Analyse. Jeder Aufruf liefert eine eigene Kopie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerritoryAnalysisResult {
    pub country_id: String,
    pub country_name: String,
    pub classification: Classification,
    /// Absteigend nach Fläche, Rang 0 zuerst
    pub territories: Vec<Territory>,
    pub polygon_count: usize,
    pub total_area: f64,
    pub main_area: f64,
    pub main_area_percentage: f64,
    /// `None`, wenn das Land nur aus einem Teil besteht
    pub max_distance: Option<f64>,
    pub distance: DistanceReport,
    pub threshold_used: f64,
    /// Anzahl der beim Zerlegen verworfenen, entarteten Teile
    pub dropped_parts: usize,
}

impl TerritoryAnalysisResult {
    pub fn has_exclaves(&self) -> bool {
        self.classification == Classification::HasExclaves
    }

    pub fn is_island_nation(&self) -> bool {
        self.classification == Classification::IslandNation
    }

    /// Der größte Teil (Rang 0)
    pub fn main_territory(&self) -> Option<&Territory> {
        self.territories.first()
    }

    /// Alle Teile außer dem Hauptteil; leer, wenn das Land keine Exklaven hat
    pub fn exclaves(&self) -> &[Territory] {
        if self.has_exclaves() {
            &self.territories[1..]
        } else {
            &[]
        }
    }

    pub fn to_json(&self) -> TerritoryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> TerritoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Führt Zerlegung, Flächen-, Abstands- und Klassifikationsanalyse zusammen.
///
/// Zustandslos bis auf die Konfiguration; kann zwischen Threads geteilt werden.
#[derive(Debug, Clone, Default)]
pub struct TerritoryAnalyzer {
    config: AnalysisConfig,
    decomposer: Decomposer,
}

impl TerritoryAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            decomposer: Decomposer::new(),
        }
    }

    pub fn with_decomposer(mut self, decomposer: Decomposer) -> Self {
        self.decomposer = decomposer;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analysiert ein Land. Bricht beim ersten Fehler ab, ohne Teilergebnis.
    pub fn analyze(&self, country: &CountryGeometry) -> TerritoryResult<TerritoryAnalysisResult> {
        // Konfiguration vor jeder Geometrie-Arbeit prüfen
        self.config.validate()?;

        let decomposition = self.decomposer.decompose(&country.name, &country.geometry)?;
        let dropped_parts = decomposition.dropped.len();
        let areas = analyze_areas(&country.name, decomposition.parts)?;

        let distance = DistanceAnalyzer::new(
            self.config.coordinate_system,
            self.config.separation_method,
        )
        .analyze(&areas.territories);

        let classification = classify(&areas.territories, self.config.threshold)?;

        let (main_area, main_area_percentage) = areas
            .main()
            .map(|t| (t.area, t.percentage_of_total))
            .unwrap_or_default();

        debug!(
            country = %country.name,
            %classification,
            parts = areas.territories.len(),
            main_area_percentage,
            "analyzed country"
        );

        Ok(TerritoryAnalysisResult {
            country_id: country.iso_code.clone(),
            country_name: country.name.clone(),
            classification,
            polygon_count: areas.territories.len(),
            total_area: areas.total_area,
            main_area,
            main_area_percentage,
            max_distance: distance.max_distance,
            distance,
            threshold_used: self.config.threshold,
            dropped_parts,
            territories: areas.territories,
        })
    }

    /// Holt die Geometrie aus der Quelle und analysiert sie.
    /// Fehler der Quelle werden unverändert weitergereicht.
    pub fn analyze_from_source<S>(
        &self,
        country: &str,
        source: &S,
    ) -> TerritoryResult<TerritoryAnalysisResult>
    where
        S: GeometrySource + ?Sized,
    {
        self.config.validate()?;
        let geometry = source.fetch(country)?;
        self.analyze(&geometry)
    }

    /// Analysiert mehrere Länder unabhängig voneinander
    pub fn analyze_batch(
        &self,
        countries: &[CountryGeometry],
    ) -> Vec<TerritoryResult<TerritoryAnalysisResult>> {
        countries
            .iter()
            .map(|country| {
                let result = self.analyze(country);
                if let Err(err) = &result {
                    debug!(country = %country.name, %err, "country analysis failed");
                }
                result
            })
            .collect()
    }

    /// Bounding-Region gemäß Klassifikation und `exclude_exclaves`
    pub fn bounds(&self, result: &TerritoryAnalysisResult) -> TerritoryResult<BoundsRegion> {
        calculate_bounds(
            &result.territories,
            result.classification,
            self.config.exclude_exclaves,
        )
    }

    /// Quadratischer Kartenausschnitt um die Bounding-Region
    pub fn framed_view(&self, region: &BoundsRegion) -> TerritoryResult<Bounds2D> {
        frame_view(region, self.config.target_fraction)
    }

    /// Bestimmt, an welche Teile des analysierten Landes ein Nachbar grenzt
    pub fn tag_neighbor(
        &self,
        result: &TerritoryAnalysisResult,
        neighbor: &CountryGeometry,
    ) -> TerritoryResult<NeighborCandidate> {
        let ranks = tag_named_neighbor(
            &neighbor.name,
            &result.territories,
            &neighbor.geometry,
            self.config.neighbor_tolerance,
            self.config.coordinate_system,
        )?;
        Ok(NeighborCandidate::new(
            neighbor.name.clone(),
            neighbor.iso_code.clone(),
            ranks,
        ))
    }

    /// Nachbarn für die Darstellung, gefiltert nach `exclude_exclaves`
    pub fn relevant_neighbors(&self, candidates: &[NeighborCandidate]) -> Vec<NeighborCandidate> {
        filter_relevant_neighbors(candidates, self.config.exclude_exclaves)
    }
}

/// Analyse mit Standard-Konfiguration und gegebener Schwelle
pub fn analyze(country: &CountryGeometry, threshold: f64) -> TerritoryResult<TerritoryAnalysisResult> {
    let threshold = validate_threshold(threshold)?;
    TerritoryAnalyzer::new(AnalysisConfig::default().with_threshold(threshold)).analyze(country)
}
