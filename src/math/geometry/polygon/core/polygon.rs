// src/math/geometry/polygon/core/polygon.rs

use super::properties::RingProperties;
use crate::math::types::*;
use std::fmt;

/// Ein einfacher (nicht zusammengesetzter) Polygon-Teil eines Landes.
///
/// Hält den Außenring und alle Löcher unverändert. Fläche, Schwerpunkt und
/// Bounding Box werden einmal beim Erstellen berechnet; der Teil ist danach
/// unveränderlich.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPart {
    polygon: Polygon<f64>,
    area: f64,
    centroid: Point2D,
    bounds: Bounds2D,
}

impl PolygonPart {
    /// Erstellt einen Teil aus einem `geo::Polygon`
    pub fn new(polygon: Polygon<f64>) -> Self {
        let exterior_area = polygon.exterior().ring_area();
        let hole_area: f64 = polygon.interiors().iter().map(|h| h.ring_area()).sum();
        let area = (exterior_area - hole_area).max(0.0);

        let centroid = Self::weighted_centroid(&polygon, area);
        let bounds = Bounds2D::from_points_iter(polygon.exterior().coords().copied())
            .unwrap_or_else(Bounds2D::empty);

        Self {
            polygon,
            area,
            centroid,
            bounds,
        }
    }

    /// Flächengewichteter Schwerpunkt, Löcher werden abgezogen.
    /// Fällt bei Fläche 0 auf das arithmetische Mittel des Außenrings zurück.
    fn weighted_centroid(polygon: &Polygon<f64>, area: f64) -> Point2D {
        if area <= 0.0 {
            return polygon.exterior().vertex_mean().unwrap_or(Point2D { x: 0.0, y: 0.0 });
        }

        let (ex, ey) = polygon.exterior().first_moments();
        let (hx, hy) = polygon
            .interiors()
            .iter()
            .map(|h| h.first_moments())
            .fold((0.0, 0.0), |acc, m| (acc.0 + m.0, acc.1 + m.1));

        Point2D {
            x: (ex - hx) / area,
            y: (ey - hy) / area,
        }
    }

    /// Zugriff auf die Geometrie
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Außenring
    pub fn exterior(&self) -> &LineString<f64> {
        self.polygon.exterior()
    }

    /// Löcher
    pub fn holes(&self) -> &[LineString<f64>] {
        self.polygon.interiors()
    }

    /// Alle Ringe (Außenring zuerst)
    pub fn rings(&self) -> impl Iterator<Item = &LineString<f64>> {
        std::iter::once(self.polygon.exterior()).chain(self.polygon.interiors().iter())
    }

    /// Fläche (Shoelace, Löcher abgezogen) in den Einheiten der Eingabe
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn centroid(&self) -> Point2D {
        self.centroid
    }

    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Anzahl der Vertices über alle Ringe
    pub fn vertex_count(&self) -> usize {
        self.rings().map(|r| r.0.len()).sum()
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for PolygonPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonPart({} vertices, {} holes, area {:.6})",
            self.vertex_count(),
            self.holes().len(),
            self.area
        )
    }
}

impl From<Polygon<f64>> for PolygonPart {
    fn from(polygon: Polygon<f64>) -> Self {
        Self::new(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, size: f64) -> LineString<f64> {
        LineString::from(vec![
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
            (x0, y0),
        ])
    }

    #[test]
    fn test_square_properties() {
        let part = PolygonPart::new(Polygon::new(square(0.0, 0.0, 2.0), vec![]));
        assert_relative_eq!(part.area(), 4.0);
        assert_relative_eq!(part.centroid().x, 1.0);
        assert_relative_eq!(part.centroid().y, 1.0);
        assert_eq!(part.bounds().min, Point2D { x: 0.0, y: 0.0 });
        assert_eq!(part.bounds().max, Point2D { x: 2.0, y: 2.0 });
    }

    #[test]
    fn test_hole_is_subtracted() {
        let part = PolygonPart::new(Polygon::new(
            square(0.0, 0.0, 4.0),
            vec![square(0.0, 0.0, 2.0)],
        ));
        assert_relative_eq!(part.area(), 12.0);
        // Schwerpunkt verschiebt sich weg vom Loch
        assert!(part.centroid().x > 2.0);
        assert!(part.centroid().y > 2.0);
        assert_eq!(part.holes().len(), 1);
        assert_eq!(part.rings().count(), 2);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let cw = LineString::from(vec![(0.0, 0.0), (0.0, 3.0), (3.0, 3.0), (3.0, 0.0), (0.0, 0.0)]);
        let part = PolygonPart::new(Polygon::new(cw, vec![]));
        assert_relative_eq!(part.area(), 9.0);
        assert_relative_eq!(part.centroid().x, 1.5);
    }

    #[test]
    fn test_collinear_ring_has_zero_area() {
        let line = LineString::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let part = PolygonPart::new(Polygon::new(line, vec![]));
        assert_eq!(part.area(), 0.0);
        assert_relative_eq!(part.centroid().x, 1.0);
    }
}
