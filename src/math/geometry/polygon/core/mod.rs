// src/math/geometry/polygon/core/mod.rs

pub mod polygon; // PolygonPart selbst
pub mod properties; // Shoelace, Momente, Orientierung
pub mod validation; // Erkennung degenerierter Teile

pub use self::polygon::PolygonPart;
pub use self::properties::RingProperties;
pub use self::validation::{PartDefect, PartValidator};
