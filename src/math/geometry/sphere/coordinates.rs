// src/math/geometry/sphere/coordinates.rs

use crate::math::{types::*, utils::*};

/// Geografische Koordinaten (Lat/Lon)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicCoordinates {
    /// Breitengrad in Radiant (-π/2 bis π/2)
    pub latitude: f64,
    /// Längengrad in Radiant (-π bis π)
    pub longitude: f64,
}

impl GeographicCoordinates {
    /// Erstellt neue geografische Koordinaten
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let half_pi = constants::PI * 0.5;
        Self {
            latitude: latitude.clamp(-half_pi, half_pi),
            longitude: angles::normalize_angle_signed(longitude),
        }
    }

    /// Erstellt aus Grad-Werten
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(angles::deg_to_rad(lat_deg), angles::deg_to_rad(lon_deg))
    }

    /// Interpretiert ein Koordinatenpaar als (Länge, Breite) in Grad
    pub fn from_lon_lat(point: Point2D) -> Self {
        Self::from_degrees(point.y, point.x)
    }

    /// Zentriwinkel zu einem anderen Punkt (Haversine-Formel, Einheitskugel)
    pub fn angular_distance_to(&self, other: &GeographicCoordinates) -> f64 {
        let dlat = other.latitude - self.latitude;
        let dlon = other.longitude - self.longitude;

        let a = (dlat * 0.5).sin().powi(2)
            + self.latitude.cos() * other.latitude.cos() * (dlon * 0.5).sin().powi(2);

        2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt())
    }

    /// Berechnet den Großkreis-Abstand zu einem anderen Punkt
    pub fn distance_to(&self, other: &GeographicCoordinates, radius: f64) -> f64 {
        radius * self.angular_distance_to(other)
    }

    /// Anfangs-Kurswinkel zu einem anderen Punkt, in [-π, π)
    pub fn bearing_to(&self, other: &GeographicCoordinates) -> f64 {
        let dlon = other.longitude - self.longitude;
        let y = dlon.sin() * other.latitude.cos();
        let x = self.latitude.cos() * other.latitude.sin()
            - self.latitude.sin() * other.latitude.cos() * dlon.cos();

        y.atan2(x)
    }
}

/// Großkreis-Metrik auf einer Kugel mit festem Radius.
///
/// Koordinatenpaare werden als (Länge, Breite) in Grad gelesen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircle {
    pub radius: f64,
}

impl Default for GreatCircle {
    fn default() -> Self {
        Self {
            radius: constants::EARTH_MEAN_RADIUS_KM,
        }
    }
}

impl GreatCircle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Abstand zweier (lon, lat)-Punkte
    pub fn distance(&self, a: Point2D, b: Point2D) -> f64 {
        GeographicCoordinates::from_lon_lat(a)
            .distance_to(&GeographicCoordinates::from_lon_lat(b), self.radius)
    }

    /// Kürzester Abstand eines Punktes zum Großkreisbogen `start`-`end`.
    ///
    /// Cross-Track-Abstand, wenn der Fußpunkt auf dem Bogen liegt, sonst der
    /// Abstand zum näheren Endpunkt.
    pub fn point_to_arc_distance(&self, point: Point2D, start: Point2D, end: Point2D) -> f64 {
        let p = GeographicCoordinates::from_lon_lat(point);
        let a = GeographicCoordinates::from_lon_lat(start);
        let b = GeographicCoordinates::from_lon_lat(end);

        let d_ap = a.angular_distance_to(&p);
        let d_ab = a.angular_distance_to(&b);
        if d_ab < constants::EPSILON || d_ap < constants::EPSILON {
            return self.radius * d_ap;
        }

        let delta = a.bearing_to(&p) - a.bearing_to(&b);
        if delta.cos() < 0.0 {
            // Fußpunkt liegt vor dem Startpunkt
            return self.radius * d_ap;
        }

        let cross_track = (d_ap.sin() * delta.sin()).clamp(-1.0, 1.0).asin();
        let along_track = (d_ap.cos() / cross_track.cos()).clamp(-1.0, 1.0).acos();
        if along_track > d_ab {
            return self.radius * b.angular_distance_to(&p);
        }

        self.radius * cross_track.abs()
    }
}
