// src/math/geometry/polygon/core/validation.rs

use super::polygon::PolygonPart;
use super::properties::RingProperties;
use crate::math::utils::constants;
use std::fmt;

/// Gründe, aus denen ein Teil als degeneriert verworfen wird
#[derive(Debug, Clone, PartialEq)]
pub enum PartDefect {
    /// Außenring hat weniger als drei unterschiedliche Vertices
    InsufficientVertices { count: usize, minimum: usize },
    /// NaN oder unendliche Koordinate
    NonFiniteVertex { ring_index: usize, vertex_index: usize },
    /// Ring umschließt keine Fläche (kollinear oder Löcher füllen alles)
    ZeroArea { area: f64 },
}

impl fmt::Display for PartDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartDefect::InsufficientVertices { count, minimum } => {
                write!(f, "{count} distinct vertices, at least {minimum} required")
            }
            PartDefect::NonFiniteVertex {
                ring_index,
                vertex_index,
            } => write!(f, "non-finite coordinate at ring {ring_index}, vertex {vertex_index}"),
            PartDefect::ZeroArea { area } => write!(f, "encloses no area ({area})"),
        }
    }
}

/// Validator für Polygon-Teile
#[derive(Debug, Clone, Copy)]
pub struct PartValidator {
    area_tolerance: f64,
}

impl Default for PartValidator {
    fn default() -> Self {
        Self {
            area_tolerance: constants::AREA_EPSILON,
        }
    }
}

impl PartValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Toleranz, unter der eine Fläche als Null gilt
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance.max(0.0);
        self
    }

    /// Liefert den ersten gefundenen Defekt oder `None` für einen brauchbaren Teil
    pub fn validate(&self, part: &PolygonPart) -> Option<PartDefect> {
        for (ring_index, ring) in part.rings().enumerate() {
            if let Some(vertex_index) = ring
                .coords()
                .position(|c| !c.x.is_finite() || !c.y.is_finite())
            {
                return Some(PartDefect::NonFiniteVertex {
                    ring_index,
                    vertex_index,
                });
            }
        }

        let exterior = part.exterior().open_vertices();
        let mut distinct: Vec<_> = Vec::with_capacity(exterior.len());
        for v in exterior {
            if !distinct.contains(v) {
                distinct.push(*v);
                if distinct.len() >= 3 {
                    break;
                }
            }
        }
        if distinct.len() < 3 {
            return Some(PartDefect::InsufficientVertices {
                count: distinct.len(),
                minimum: 3,
            });
        }

        if part.area() <= self.area_tolerance {
            return Some(PartDefect::ZeroArea { area: part.area() });
        }

        None
    }

    pub fn is_usable(&self, part: &PolygonPart) -> bool {
        self.validate(part).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::*;

    fn part(coords: Vec<(f64, f64)>) -> PolygonPart {
        PolygonPart::new(Polygon::new(LineString::from(coords), vec![]))
    }

    #[test]
    fn test_valid_square() {
        let square = part(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!(PartValidator::new().is_usable(&square));
    }

    #[test]
    fn test_insufficient_vertices() {
        let sliver = part(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
        assert_eq!(
            PartValidator::new().validate(&sliver),
            Some(PartDefect::InsufficientVertices { count: 2, minimum: 3 })
        );
    }

    #[test]
    fn test_collinear_ring() {
        let collinear = part(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(matches!(
            PartValidator::new().validate(&collinear),
            Some(PartDefect::ZeroArea { .. })
        ));
    }

    #[test]
    fn test_non_finite_vertex() {
        let broken = part(vec![(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]);
        assert!(matches!(
            PartValidator::new().validate(&broken),
            Some(PartDefect::NonFiniteVertex { ring_index: 0, vertex_index: 1 })
        ));
    }

    #[test]
    fn test_area_tolerance() {
        let tiny = part(vec![(0.0, 0.0), (1e-3, 0.0), (1e-3, 1e-3), (0.0, 1e-3)]);
        assert!(PartValidator::new().is_usable(&tiny));
        assert!(!PartValidator::new().with_area_tolerance(1e-5).is_usable(&tiny));
    }
}
