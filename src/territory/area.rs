// src/territory/area.rs

use crate::math::{
    error::{TerritoryError, TerritoryResult},
    geometry::polygon::PolygonPart,
    types::*,
};
use serde::Serialize;
use tracing::debug;

/// Ein Polygon-Teil mit Flächenanteil und Rang (0 = größter Teil).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Territory {
    #[serde(skip)]
    pub part: PolygonPart,
    pub rank: usize,
    /// Position des Teils in der Zerlegungs-Reihenfolge
    pub source_index: usize,
    pub area: f64,
    /// Anteil an der Gesamtfläche in Prozent (0 bis 100)
    pub percentage_of_total: f64,
    pub centroid: Point2D,
    pub bounds: Bounds2D,
}

impl Territory {
    pub fn is_main(&self) -> bool {
        self.rank == 0
    }
}

/// Flächenverteilung eines Landes, absteigend nach Fläche sortiert
#[derive(Debug, Clone)]
pub struct AreaAnalysis {
    pub territories: Vec<Territory>,
    pub total_area: f64,
}

impl AreaAnalysis {
    /// Der größte Teil (Rang 0)
    pub fn main(&self) -> Option<&Territory> {
        self.territories.first()
    }
}

/// Berechnet Flächen und Prozentanteile und vergibt Ränge.
///
/// Gleich große Teile behalten ihre Eingabe-Reihenfolge (stabile Sortierung).
pub fn analyze_areas(country: &str, parts: Vec<PolygonPart>) -> TerritoryResult<AreaAnalysis> {
    let total_area: f64 = parts.iter().map(PolygonPart::area).sum();
    if !(total_area > 0.0 && total_area.is_finite()) {
        return Err(TerritoryError::ZeroArea {
            country: country.to_string(),
            total_area,
        });
    }

    let mut indexed: Vec<(usize, PolygonPart)> = parts.into_iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| b.area().total_cmp(&a.area()));

    let territories: Vec<Territory> = indexed
        .into_iter()
        .enumerate()
        .map(|(rank, (source_index, part))| Territory {
            rank,
            source_index,
            area: part.area(),
            percentage_of_total: 100.0 * part.area() / total_area,
            centroid: part.centroid(),
            bounds: part.bounds(),
            part,
        })
        .collect();

    debug!(
        country,
        total_area,
        main_percentage = territories.first().map(|t| t.percentage_of_total),
        "computed area distribution"
    );

    Ok(AreaAnalysis {
        territories,
        total_area,
    })
}
