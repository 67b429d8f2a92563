// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-10;
    /// Flächen unterhalb dieses Werts gelten als degeneriert
    pub const AREA_EPSILON: f64 = 1e-12;
    /// Toleranz für die Prozent-Summe (muss 100 ergeben)
    pub const PERCENTAGE_TOLERANCE: f64 = 1e-6;
    /// Mittlerer Erdradius (IUGG) in Kilometern
    pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;
    pub const PI: f64 = std::f64::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::PI;

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Normalisiert einen Winkel auf [-π, π)
    pub fn normalize_angle_signed(angle: f64) -> f64 {
        let tau = 2.0 * PI;
        let mut result = angle % tau;
        if result >= PI {
            result -= tau;
        } else if result < -PI {
            result += tau;
        }
        result
    }
}

/// Einfache Geometrie auf Koordinatenpaaren
pub mod simple_geometry {
    use crate::math::types::Point2D;
    use geo::{Distance, Euclidean, Intersects, Line, Point};

    pub fn distance_sq(p1: Point2D, p2: Point2D) -> f64 {
        (p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)
    }

    pub fn distance(p1: Point2D, p2: Point2D) -> f64 {
        distance_sq(p1, p2).sqrt()
    }

    /// Abstand eines Punktes zur Strecke `start`-`end`
    pub fn point_segment_distance(point: Point2D, start: Point2D, end: Point2D) -> f64 {
        Euclidean.distance(&Point::from(point), &Line::new(start, end))
    }

    /// Kürzester Abstand zweier Strecken (0 wenn sie sich schneiden)
    pub fn segment_segment_distance(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> f64 {
        Euclidean.distance(&Line::new(a1, a2), &Line::new(b1, b2))
    }

    /// Schnitt-Test über `geo::Intersects` (inklusive Berührung)
    pub fn segments_intersect(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> bool {
        Line::new(a1, a2).intersects(&Line::new(b1, b2))
    }
}
