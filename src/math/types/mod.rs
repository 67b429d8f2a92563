// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use geo::{Coord, Geometry, LineString, MultiPolygon, Polygon};

// Einheitliche Typen für das gesamte Modul
pub type Point2D = Coord<f64>;
