// src/math/geometry/polygon/mod.rs

pub mod core;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Polygon-Elemente
pub use self::core::{PartDefect, PartValidator, PolygonPart, RingProperties};
