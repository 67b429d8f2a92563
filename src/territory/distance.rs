// src/territory/distance.rs

use super::area::Territory;
use super::config::{CoordinateSystem, SeparationMethod};
use crate::math::{
    geometry::{polygon::PolygonPart, sphere::GreatCircle},
    types::*,
    utils::{angles, simple_geometry},
};
use serde::Serialize;
use tracing::debug;

/// Ergebnis der Abstandsanalyse zwischen den Teilen eines Landes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    /// Größter paarweiser Abstand; `None` bei nur einem Teil
    pub max_distance: Option<f64>,
    /// Ränge des Paares mit dem größten Abstand
    pub farthest_pair: Option<(usize, usize)>,
    pub method: SeparationMethod,
    /// "km" für geodätische, "coordinate_units" für ebene Eingaben
    pub unit: &'static str,
    /// Maximale Abweichung vom exakten Randabstand; 0 bei `Boundary`
    pub error_bound: Option<f64>,
}

/// Misst Abstände zwischen Polygon-Teilen
#[derive(Debug, Clone, Copy)]
pub struct DistanceAnalyzer {
    system: CoordinateSystem,
    method: SeparationMethod,
    sphere: GreatCircle,
}

/// Eine Strecke eines Rings mit vorberechneter Bounding Box
struct Segment {
    start: Point2D,
    end: Point2D,
    bounds: Bounds2D,
}

fn segments(part: &PolygonPart) -> Vec<Segment> {
    part.rings()
        .flat_map(|ring| ring.lines())
        .map(|line| Segment {
            start: line.start,
            end: line.end,
            bounds: Bounds2D::from_points_iter([line.start, line.end])
                .unwrap_or_else(Bounds2D::empty),
        })
        .collect()
}

/// Abstand der Breitengrade zweier Boxen in Radiant.
/// Untere Schranke für den Großkreis-Abstand aller enthaltenen Punkte.
fn latitude_gap(a: &Bounds2D, b: &Bounds2D) -> f64 {
    let gap = (b.min.y - a.max.y).max(a.min.y - b.max.y).max(0.0);
    angles::deg_to_rad(gap)
}

impl DistanceAnalyzer {
    pub fn new(system: CoordinateSystem, method: SeparationMethod) -> Self {
        Self {
            system,
            method,
            sphere: GreatCircle::default(),
        }
    }

    /// Überschreibt den Kugelradius für geodätische Abstände
    pub fn with_sphere(mut self, sphere: GreatCircle) -> Self {
        self.sphere = sphere;
        self
    }

    /// Abstand zweier Punkte in der Metrik des Koordinatensystems
    pub fn point_distance(&self, a: Point2D, b: Point2D) -> f64 {
        match self.system {
            CoordinateSystem::Planar => simple_geometry::distance(a, b),
            CoordinateSystem::Geodetic => self.sphere.distance(a, b),
        }
    }

    /// Abstand zweier Teile gemäß der gewählten Methode
    pub fn separation(&self, a: &PolygonPart, b: &PolygonPart) -> f64 {
        match self.method {
            SeparationMethod::Boundary => self.boundary_distance(a, b),
            SeparationMethod::Centroid => self.point_distance(a.centroid(), b.centroid()),
        }
    }

    /// Kürzester Abstand zwischen einem Punkt auf dem Rand von `a` und einem
    /// Punkt auf dem Rand von `b` (Löcher eingeschlossen). Sich schneidende oder
    /// berührende Ränder ergeben 0.
    pub fn boundary_distance(&self, a: &PolygonPart, b: &PolygonPart) -> f64 {
        let segs_a = segments(a);
        let segs_b = segments(b);
        let mut best = f64::INFINITY;

        for sa in &segs_a {
            for sb in &segs_b {
                if self.lower_bound(&sa.bounds, &sb.bounds) >= best {
                    continue;
                }
                let d = self.segment_distance(sa, sb);
                if d < best {
                    best = d;
                    if best == 0.0 {
                        return 0.0;
                    }
                }
            }
        }

        best
    }

    /// Untere Schranke für den Abstand aller Geometrien innerhalb zweier Boxen,
    /// in der Einheit des Koordinatensystems
    pub fn lower_bound(&self, a: &Bounds2D, b: &Bounds2D) -> f64 {
        match self.system {
            CoordinateSystem::Planar => a.distance_to_bounds(b),
            CoordinateSystem::Geodetic => self.sphere.radius * latitude_gap(a, b),
        }
    }

    fn segment_distance(&self, sa: &Segment, sb: &Segment) -> f64 {
        match self.system {
            CoordinateSystem::Planar => {
                simple_geometry::segment_segment_distance(sa.start, sa.end, sb.start, sb.end)
            }
            CoordinateSystem::Geodetic => {
                // Kreuzungstest in Grad; für kurze Kanten deckungsgleich mit dem Großkreis
                if simple_geometry::segments_intersect(sa.start, sa.end, sb.start, sb.end) {
                    return 0.0;
                }
                self.sphere
                    .point_to_arc_distance(sa.start, sb.start, sb.end)
                    .min(self.sphere.point_to_arc_distance(sa.end, sb.start, sb.end))
                    .min(self.sphere.point_to_arc_distance(sb.start, sa.start, sa.end))
                    .min(self.sphere.point_to_arc_distance(sb.end, sa.start, sa.end))
            }
        }
    }

    /// Größter Abstand vom Schwerpunkt zu einem Vertex des Außenrings
    fn radius(&self, part: &PolygonPart) -> f64 {
        part.exterior()
            .coords()
            .map(|c| self.point_distance(part.centroid(), *c))
            .fold(0.0, f64::max)
    }

    /// Obere Schranke für den Randabstand: Abstand zweier beliebiger Randpunkte
    fn upper_bound(&self, a: &PolygonPart, b: &PolygonPart) -> f64 {
        match (a.exterior().0.first(), b.exterior().0.first()) {
            (Some(pa), Some(pb)) => self.point_distance(*pa, *pb),
            _ => f64::INFINITY,
        }
    }

    /// Größter paarweiser Abstand zwischen verschiedenen Territorien.
    pub fn analyze(&self, territories: &[Territory]) -> DistanceReport {
        let unit = self.system.distance_unit();
        if territories.len() < 2 {
            return DistanceReport {
                max_distance: None,
                farthest_pair: None,
                method: self.method,
                unit,
                error_bound: None,
            };
        }

        let mut max_distance = f64::NEG_INFINITY;
        let mut farthest_pair = (territories[0].rank, territories[1].rank);

        for (i, a) in territories.iter().enumerate() {
            for b in &territories[i + 1..] {
                if self.method == SeparationMethod::Boundary
                    && self.upper_bound(&a.part, &b.part) <= max_distance
                {
                    continue;
                }
                let d = self.separation(&a.part, &b.part);
                if d > max_distance {
                    max_distance = d;
                    farthest_pair = (a.rank.min(b.rank), a.rank.max(b.rank));
                }
            }
        }

        let error_bound = match self.method {
            SeparationMethod::Boundary => 0.0,
            SeparationMethod::Centroid => {
                // |Schwerpunktabstand - Randabstand| <= r_a + r_b
                let mut radii: Vec<f64> = territories.iter().map(|t| self.radius(&t.part)).collect();
                radii.sort_by(|a, b| b.total_cmp(a));
                radii[0] + radii[1]
            }
        };

        debug!(
            max_distance,
            ?farthest_pair,
            error_bound,
            unit,
            "computed territory separation"
        );

        DistanceReport {
            max_distance: Some(max_distance),
            farthest_pair: Some(farthest_pair),
            method: self.method,
            unit,
            error_bound: Some(error_bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::territory::area::analyze_areas;
    use approx::assert_abs_diff_eq;

    fn rect_part(x0: f64, y0: f64, w: f64, h: f64) -> PolygonPart {
        PolygonPart::new(Polygon::new(
            LineString::from(vec![(x0, y0), (x0 + w, y0), (x0 + w, y0 + h), (x0, y0 + h)]),
            vec![],
        ))
    }

    fn planar(method: SeparationMethod) -> DistanceAnalyzer {
        DistanceAnalyzer::new(CoordinateSystem::Planar, method)
    }

    #[test]
    fn test_boundary_distance_planar() {
        let a = rect_part(0.0, 0.0, 1.0, 1.0);
        let b = rect_part(4.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(planar(SeparationMethod::Boundary).boundary_distance(&a, &b), 3.0);

        // Diagonal versetzt: Ecke zu Ecke
        let c = rect_part(4.0, 5.0, 1.0, 1.0);
        assert_abs_diff_eq!(planar(SeparationMethod::Boundary).boundary_distance(&a, &c), 5.0);
    }

    #[test]
    fn test_touching_parts_have_zero_distance() {
        let a = rect_part(0.0, 0.0, 1.0, 1.0);
        let b = rect_part(1.0, 0.0, 1.0, 1.0);
        assert_eq!(planar(SeparationMethod::Boundary).boundary_distance(&a, &b), 0.0);
        let geo = DistanceAnalyzer::new(CoordinateSystem::Geodetic, SeparationMethod::Boundary);
        assert_eq!(geo.boundary_distance(&a, &b), 0.0);
    }

    #[test]
    fn test_boundary_is_smaller_than_centroid_for_elongated_parts() {
        // Langgezogener Streifen neben einer Insel
        let strip = rect_part(0.0, 0.0, 100.0, 1.0);
        let island = rect_part(0.0, 3.0, 1.0, 1.0);
        let boundary = planar(SeparationMethod::Boundary).separation(&strip, &island);
        let centroid = planar(SeparationMethod::Centroid).separation(&strip, &island);
        assert_abs_diff_eq!(boundary, 2.0);
        assert!(centroid > 49.0);
    }

    #[test]
    fn test_geodetic_boundary_distance() {
        // Zwei Teile auf dem Äquator, 1 Grad Länge auseinander
        let a = rect_part(0.0, -0.5, 1.0, 1.0);
        let b = rect_part(2.0, -0.5, 1.0, 1.0);
        let analyzer = DistanceAnalyzer::new(CoordinateSystem::Geodetic, SeparationMethod::Boundary);
        assert_abs_diff_eq!(analyzer.boundary_distance(&a, &b), 111.195, epsilon = 0.05);

        // Dieselbe Konstellation bei 60° Nord ist etwa halb so weit
        let c = rect_part(0.0, 59.5, 1.0, 1.0);
        let d = rect_part(2.0, 59.5, 1.0, 1.0);
        let north = analyzer.boundary_distance(&c, &d);
        assert!(north > 50.0 && north < 60.0, "north = {north}");
    }

    #[test]
    fn test_custom_sphere_radius() {
        let unit = DistanceAnalyzer::new(CoordinateSystem::Geodetic, SeparationMethod::Centroid)
            .with_sphere(GreatCircle::new(1.0));
        let d = unit.point_distance(Point2D { x: 0.0, y: 0.0 }, Point2D { x: 90.0, y: 0.0 });
        assert_abs_diff_eq!(d, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_single_territory_has_no_distance() {
        let areas = analyze_areas("XX", vec![rect_part(0.0, 0.0, 1.0, 1.0)]).unwrap();
        let report = planar(SeparationMethod::Boundary).analyze(&areas.territories);
        assert_eq!(report.max_distance, None);
        assert_eq!(report.farthest_pair, None);
        assert_eq!(report.error_bound, None);
    }

    #[test]
    fn test_max_pairwise_distance() {
        let parts = vec![
            rect_part(0.0, 0.0, 3.0, 3.0),
            rect_part(5.0, 0.0, 1.0, 1.0),
            rect_part(20.0, 0.0, 1.0, 1.0),
        ];
        let areas = analyze_areas("XX", parts).unwrap();
        let report = planar(SeparationMethod::Boundary).analyze(&areas.territories);
        assert_abs_diff_eq!(report.max_distance.unwrap(), 17.0);
        assert_eq!(report.farthest_pair, Some((0, 2)));
        assert_eq!(report.error_bound, Some(0.0));
        assert_eq!(report.unit, "coordinate_units");
    }

    #[test]
    fn test_centroid_error_bound_holds() {
        let parts = vec![rect_part(0.0, 0.0, 100.0, 1.0), rect_part(0.0, 3.0, 1.0, 1.0)];
        let areas = analyze_areas("XX", parts).unwrap();
        let exact = planar(SeparationMethod::Boundary).analyze(&areas.territories);
        let approx = planar(SeparationMethod::Centroid).analyze(&areas.territories);
        let diff = (approx.max_distance.unwrap() - exact.max_distance.unwrap()).abs();
        assert!(diff <= approx.error_bound.unwrap());
    }
}
