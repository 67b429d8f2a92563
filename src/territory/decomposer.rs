// src/territory/decomposer.rs

use crate::math::{
    error::{TerritoryError, TerritoryResult},
    geometry::polygon::{PartDefect, PartValidator, PolygonPart},
    types::*,
};
use tracing::{debug, warn};

/// Ein beim Zerlegen verworfener Teil
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedPart {
    /// Position in Zerlegungs-Reihenfolge (vor dem Verwerfen)
    pub index: usize,
    pub defect: PartDefect,
}

/// Ergebnis der Zerlegung: brauchbare Teile in Eingabe-Reihenfolge
#[derive(Debug, Clone)]
pub struct Decomposition {
    pub parts: Vec<PolygonPart>,
    pub dropped: Vec<DroppedPart>,
}

/// Zerlegt die Geometrie eines Landes in einfache Polygon-Teile.
///
/// Reine Strukturauflösung: nichts wird verschmolzen, geteilt oder vereinfacht.
#[derive(Debug, Clone, Default)]
pub struct Decomposer {
    validator: PartValidator,
}

impl Decomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validator(mut self, validator: PartValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Löst `geometry` auf. Verschachtelte Collections werden über einen expliziten
    /// Stack abgearbeitet, die Reihenfolge der Teile entspricht der Eingabe.
    pub fn decompose(&self, country: &str, geometry: &Geometry<f64>) -> TerritoryResult<Decomposition> {
        let mut stack: Vec<&Geometry<f64>> = vec![geometry];
        let mut candidates: Vec<PolygonPart> = Vec::new();

        while let Some(current) = stack.pop() {
            match current {
                Geometry::Polygon(polygon) => candidates.push(PolygonPart::new(polygon.clone())),
                Geometry::MultiPolygon(multi) => {
                    candidates.extend(multi.0.iter().cloned().map(PolygonPart::new))
                }
                Geometry::Rect(rect) => candidates.push(PolygonPart::new(rect.to_polygon())),
                Geometry::Triangle(triangle) => {
                    candidates.push(PolygonPart::new(triangle.to_polygon()))
                }
                Geometry::GeometryCollection(collection) => {
                    // Umgekehrt ablegen, damit das erste Element zuerst verarbeitet wird
                    stack.extend(collection.0.iter().rev());
                }
                Geometry::Point(_)
                | Geometry::Line(_)
                | Geometry::LineString(_)
                | Geometry::MultiPoint(_)
                | Geometry::MultiLineString(_) => {
                    return Err(TerritoryError::UnsupportedGeometry {
                        country: country.to_string(),
                        kind: geometry_kind(current).to_string(),
                    });
                }
            }
        }

        let mut parts = Vec::with_capacity(candidates.len());
        let mut dropped = Vec::new();
        for (index, part) in candidates.into_iter().enumerate() {
            match self.validator.validate(&part) {
                None => parts.push(part),
                Some(defect) => {
                    warn!(country, part_index = index, %defect, "dropping degenerate polygon part");
                    dropped.push(DroppedPart { index, defect });
                }
            }
        }

        if parts.is_empty() {
            return Err(TerritoryError::EmptyGeometry {
                country: country.to_string(),
            });
        }

        debug!(
            country,
            parts = parts.len(),
            dropped = dropped.len(),
            "decomposed country geometry"
        );
        Ok(Decomposition { parts, dropped })
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
