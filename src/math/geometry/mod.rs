// src/math/geometry/mod.rs

pub mod polygon;
pub mod sphere;

// Polygon-Exporte
pub use self::polygon::{PartDefect, PartValidator, PolygonPart, RingProperties};

// Sphere-Exporte
pub use self::sphere::{GeographicCoordinates, GreatCircle};
